mod client;

pub use client::{check_api_url, GithubClient, SearchItem};
