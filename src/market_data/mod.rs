// Market data module entrypoint
pub mod adapters;    // raw book sources (indexer REST, static fixtures)
pub mod normaliser;  // decimal strings <-> micro-units
pub mod market;      // market records with explicit API-only fields
pub mod view;        // presentation form of a unified book
