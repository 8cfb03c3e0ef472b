//! NormalizeTableHandler - Rewrites lenient table text in canonical form.

use std::sync::Arc;

use tracing::debug;

use crate::ports::{PayoffTableParser, PayoffTableWriter};

/// Command to normalize table text.
#[derive(Debug, Clone)]
pub struct NormalizeTableCommand {
    pub csv: String,
}

/// Handler that parses leniently and writes canonically.
pub struct NormalizeTableHandler {
    parser: Arc<dyn PayoffTableParser>,
    writer: Arc<dyn PayoffTableWriter>,
}

impl NormalizeTableHandler {
    pub fn new(parser: Arc<dyn PayoffTableParser>, writer: Arc<dyn PayoffTableWriter>) -> Self {
        Self { parser, writer }
    }

    pub fn handle(&self, cmd: NormalizeTableCommand) -> String {
        let table = self.parser.parse(&cmd.csv);
        debug!(alternatives = table.len(), "Normalizing table");
        self.writer.write(&table)
    }
}
