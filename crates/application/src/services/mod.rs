mod alias_resolver;
mod zone_resolver;

pub use alias_resolver::AliasResolver;
pub use zone_resolver::ZoneResolver;
