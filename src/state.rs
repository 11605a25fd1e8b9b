use std::sync::Arc;

use sqlx::MySqlPool;

use crate::cache::DrawCache;
use crate::clients::caixa::CaixaClient;
use crate::notify::sink::NotificationSink;

#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
    pub cache: DrawCache,
    pub lottery: CaixaClient,
    pub sink: Arc<dyn NotificationSink>,
}
