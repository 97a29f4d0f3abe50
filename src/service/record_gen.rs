use rand::Rng;

use crate::db::models::Record;

/// Cities a generated record may live in, drawn uniformly.
pub const CITIES: [&str; 5] = [
    "São Paulo",
    "Rio de Janeiro",
    "Belo Horizonte",
    "Brasília",
    "Porto Alegre",
];

/// Build one synthetic record written by `host`.
///
/// The id is random in `[1000, 9999]`, so two requests may produce the same
/// id; nothing here guards against that.
pub fn generate<R: Rng>(rng: &mut R, host: &str) -> Record {
    let id = rng.random_range(1000..=9999);

    let name_bytes: [u8; 4] = rng.random();
    let name = format!("Aluno_{}", hex::encode_upper(name_bytes));

    let surname = format!("Silva_{}", rng.random_range(100..=999));
    let address = format!("Rua {}, Centro", rng.random_range(1..=1000));
    let city = CITIES[rng.random_range(0..CITIES.len())].to_string();

    Record {
        id,
        name,
        surname,
        address,
        city,
        host: host.to_string(),
    }
}
