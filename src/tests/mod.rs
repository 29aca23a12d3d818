mod builder;
mod conversion;
mod serialization;
mod util;
mod v11;
