mod chrome;
mod traits;

pub use chrome::ChromeFetcher;
pub use traits::Fetcher;
