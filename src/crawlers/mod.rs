pub mod crawler;
pub mod filesystem;

pub use crawler::Crawler;
pub use filesystem::FilesystemCrawler;
