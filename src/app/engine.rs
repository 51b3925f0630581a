use crate::adapters::export::{export, ExportFormat};
use crate::adapters::file_source::JsonFileSource;
use crate::adapters::http_source::HttpOrderSource;
use crate::adapters::static_source::StaticSource;
use crate::adapters::storage::LocalStorage;
use crate::config::toml_config::BoardConfig;
use crate::core::board::{BoardSettings, OrderBoard};
use crate::core::{Clock, KarigarSource, OrderSource, Storage};
use crate::utils::error::Result;
use std::time::Duration;

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub rendered: String,
    pub written_to: Option<String>,
    pub group_count: usize,
    pub order_count: usize,
}

/// Fetch orders, group them on a board, export the board.
pub struct BoardEngine<S: Storage> {
    orders: Box<dyn OrderSource>,
    karigars: Box<dyn KarigarSource>,
    storage: S,
    settings: BoardSettings,
    format: ExportFormat,
    output_path: Option<String>,
    expand_all: bool,
}

impl<S: Storage> BoardEngine<S> {
    pub fn new(
        orders: Box<dyn OrderSource>,
        karigars: Box<dyn KarigarSource>,
        storage: S,
        settings: BoardSettings,
    ) -> Self {
        Self {
            orders,
            karigars,
            storage,
            settings,
            format: ExportFormat::default(),
            output_path: None,
            expand_all: false,
        }
    }

    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output_path(mut self, path: Option<String>) -> Self {
        self.output_path = path;
        self
    }

    pub fn with_expand_all(mut self, expand_all: bool) -> Self {
        self.expand_all = expand_all;
        self
    }

    pub async fn load_board(&self) -> Result<OrderBoard> {
        let orders = self.orders.fetch_orders().await?;
        let karigars = self.karigars.fetch_karigars().await?;
        tracing::info!("Loaded {} orders and {} karigars", orders.len(), karigars.len());

        let mut board = OrderBoard::with_orders(self.settings, orders, karigars);
        if self.expand_all && !board.any_expanded() {
            board.toggle_all();
        }
        Ok(board)
    }

    pub async fn run<C: Clock + ?Sized>(&self, clock: &C) -> Result<RunOutcome> {
        let board = self.load_board().await?;
        let grouped = board.grouped();
        tracing::info!(
            "📋 {} orders in {} groups ({:?})",
            grouped.order_count(),
            grouped.len(),
            board.mode()
        );

        let rendered = export(&board.view(clock), self.format)?;

        if let Some(path) = &self.output_path {
            self.storage.write_file(path, rendered.as_bytes()).await?;
            tracing::info!("📁 Board written to {}", path);
        }

        Ok(RunOutcome {
            rendered,
            written_to: self.output_path.clone(),
            group_count: grouped.len(),
            order_count: grouped.order_count(),
        })
    }
}

impl BoardEngine<LocalStorage> {
    /// Builds the engine a validated config describes; paths resolve against `base_path`.
    pub fn from_config(config: &BoardConfig, base_path: &str) -> Self {
        let storage = LocalStorage::new(base_path);

        let (orders, karigars): (Box<dyn OrderSource>, Box<dyn KarigarSource>) = if config.is_http() {
            let endpoint = config.source.endpoint.clone().unwrap_or_default();
            let mut http = HttpOrderSource::new(endpoint);
            if let Some(timeout) = config.source.timeout_seconds {
                http = http.with_timeout(Duration::from_secs(timeout));
            }

            let karigars: Box<dyn KarigarSource> =
                match (&config.source.karigars_endpoint, &config.source.karigars_path) {
                    (Some(karigars_endpoint), _) => {
                        http = http.with_karigars(karigars_endpoint.clone());
                        Box::new(http.clone())
                    }
                    (None, Some(path)) => Box::new(JsonFileSource::karigars_only(storage.clone(), path.clone())),
                    (None, None) => Box::new(StaticSource::default()),
                };
            let orders: Box<dyn OrderSource> = Box::new(http);
            (orders, karigars)
        } else {
            let mut source = JsonFileSource::new(storage.clone(), config.source.path.clone().unwrap_or_default());
            if let Some(karigars_path) = &config.source.karigars_path {
                source = source.with_karigars(karigars_path.clone());
            }
            let orders: Box<dyn OrderSource> = Box::new(source.clone());
            let karigars: Box<dyn KarigarSource> = Box::new(source);
            (orders, karigars)
        };

        Self::new(orders, karigars, storage, config.board_settings())
            .with_format(config.export_format())
            .with_output_path(config.output.path.clone())
    }
}
