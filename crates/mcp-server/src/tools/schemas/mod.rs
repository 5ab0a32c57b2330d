pub(crate) mod enumerate;
pub(crate) mod fetch;
pub(crate) mod upsert;
