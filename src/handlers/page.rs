use axum::extract::State;
use axum::response::Html;

use crate::db::store::Connector;
use crate::middleware::peer::ClientMeta;
use crate::render::render_page;
use crate::router::AppState;
use crate::service::host_info::HostInfo;
use crate::service::record_gen;
use crate::service::report::build_report;

/// GET / -> inserts one record tagged with this container and renders the report.
///
/// Always answers 200; database failures show up as an error panel.
pub async fn page_handler<C: Connector>(
    State(state): State<AppState<C>>,
    meta: ClientMeta,
) -> Html<String> {
    let info = HostInfo::collect(&state.hostname, meta.server_ip, meta.client_ip);
    let record = record_gen::generate(&mut rand::rng(), &state.hostname);

    let report = build_report(&state.connector, &state.db, info, record).await;
    Html(render_page(&report))
}
