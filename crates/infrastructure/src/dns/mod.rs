mod cname_lookup;

pub use cname_lookup::HickoryCnameLookup;
