use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{error, info, instrument};

use crate::builtin::BuiltinTable;
use crate::error::{MimeError, Result};
use crate::provider::TableProvider;
use crate::table::MappingTable;

// The table behind MimeTypes::new(); loaded on first use and never replaced.
static BUILT_IN: SharedTable = SharedTable::new();

/// A mapping table that is loaded once and then handed out to every caller.
///
/// Concurrent first callers block until a single provider call finishes. The
/// outcome is kept either way: once a load has failed, every later caller gets
/// the same `TableLoad` error and the provider is not called again.
#[derive(Debug)]
pub struct SharedTable {
    cell: OnceCell<std::result::Result<Arc<MappingTable>, Arc<anyhow::Error>>>,
}

impl SharedTable {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    #[instrument(skip_all)]
    pub fn get_or_load(&self, provider: &dyn TableProvider) -> Result<Arc<MappingTable>> {
        let outcome = self.cell.get_or_init(|| match provider.load() {
            Ok(table) => {
                info!(
                    "Loaded MIME mapping table: {} extensions, {} MIME types",
                    table.mimes().len(),
                    table.extensions().len()
                );
                Ok(Arc::new(table))
            }
            Err(e) => {
                error!("Unable to load MIME mapping table: {e:?}");
                Err(Arc::new(e))
            }
        });

        match outcome {
            Ok(table) => Ok(table.clone()),
            Err(e) => Err(MimeError::TableLoad(e.clone())),
        }
    }

    /// True once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        matches!(self.cell.get(), Some(Ok(_)))
    }

    /// True once a load has been attempted, whether or not it succeeded.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for SharedTable {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide built-in table.
pub fn builtin_table() -> Result<Arc<MappingTable>> {
    BUILT_IN.get_or_load(&BuiltinTable)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use anyhow::anyhow;
    use tracing_test::traced_test;

    use super::{builtin_table, SharedTable};
    use crate::error::{MimeError, Result};
    use crate::provider::{MockTableProvider, TableProvider};
    use crate::table::MappingTable;

    fn fixture() -> MappingTable {
        MappingTable::from_json_str(r#"{"mimes": {"json": ["application/json"]}}"#).unwrap()
    }

    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl TableProvider for CountingProvider {
        fn load(&self) -> anyhow::Result<MappingTable> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(20));
            Ok(fixture())
        }
    }

    #[test]
    #[traced_test]
    fn test_loads_once() -> Result<()> {
        let mut provider = MockTableProvider::new();
        provider.expect_load().times(1).returning(|| Ok(fixture()));

        let shared = SharedTable::new();
        assert!(!shared.is_loaded());
        assert!(!shared.is_initialized());

        let a = shared.get_or_load(&provider)?;
        let b = shared.get_or_load(&provider)?;

        assert!(shared.is_loaded());
        assert!(Arc::ptr_eq(&a, &b));
        assert!(logs_contain("Loaded MIME mapping table: 1 extensions"));
        Ok(())
    }

    #[test]
    #[traced_test]
    fn test_failed_load_is_kept() {
        let shared = SharedTable::new();

        let mut failing = MockTableProvider::new();
        failing
            .expect_load()
            .times(1)
            .returning(|| Err(anyhow!("mime.types is missing")));

        for _ in 0..5 {
            let err = shared.get_or_load(&failing).unwrap_err();
            assert!(matches!(err, MimeError::TableLoad(_)));
            assert!(err.to_string().contains("mime.types is missing"));
        }
        assert!(shared.is_initialized());
        assert!(!shared.is_loaded());
        assert!(logs_contain("Unable to load MIME mapping table"));

        // a different provider does not get a second chance either
        let mut working = MockTableProvider::new();
        working.expect_load().never();
        let err = shared.get_or_load(&working).unwrap_err();
        assert!(err.to_string().contains("mime.types is missing"));
    }

    #[test]
    fn test_concurrent_first_use() {
        let shared = SharedTable::new();
        let provider = CountingProvider {
            calls: AtomicUsize::new(0),
        };

        let (shared, provider) = (&shared, &provider);
        let tables: Vec<Arc<MappingTable>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(move || shared.get_or_load(provider).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        for t in &tables {
            assert!(Arc::ptr_eq(t, &tables[0]));
        }
    }

    #[test]
    fn test_builtin_table_is_shared() -> Result<()> {
        let a = builtin_table()?;
        let b = builtin_table()?;
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.mimes()["json"], vec!["application/json"]);
        Ok(())
    }
}
