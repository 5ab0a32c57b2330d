use std::sync::Mutex;

/// Serializes tests that read or mutate process-wide env vars (`CONTEXT_STORE_DIR`).
pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());
