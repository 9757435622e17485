use reqwest::Client;
use tracing::{error, info};
use url::Url;

use crate::{
    config::Config,
    error::CrawlError,
    model::PaperRecord,
    parser::ListingParser,
    priority::CategoryPriority
};

// Listing page path for one category, relative to the site root.
macro_rules! listing_path {
    () => { "list/{}/new" }
}

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches listing pages strictly one after another and feeds them to a
/// single run-scoped [`ListingParser`].
///
/// Categories are visited in priority order, so a paper listed under several
/// requested categories is attributed to the highest priority one.
#[derive(Debug)]
pub struct ListingCrawler {
    client: Client,
    parser: ListingParser,
    base_url: Url,
    categories: Vec<String>
}

impl ListingCrawler {
    pub fn new(client: Client, parser: ListingParser, base_url: Url, categories: Vec<String>) -> Self {
        let categories = parser.priority().order_requested(&categories);
        ListingCrawler {
            client,
            parser,
            base_url,
            categories
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, CrawlError> {
        let user_agent = config.user_agent.as_deref().unwrap_or(USER_AGENT);
        let client = Client::builder()
            .user_agent(user_agent)
            .build()?;
        let parser = ListingParser::new(CategoryPriority::new());
        Ok(Self::new(client, parser, config.base_url.clone(), config.categories.clone()))
    }

    pub fn listing_urls(&self) -> Result<Vec<Url>, CrawlError> {
        let root = site_root(&self.base_url);
        self.categories.iter()
            .map(|cat| {
                root.join(&format!(listing_path!(), cat))
                    .map_err(|source| CrawlError::ListingUrl { category: cat.clone(), source })
            })
            .collect()
    }

    // Returns the final url after redirects, which relative links resolve against.
    async fn get_raw_html(&self, url: &Url) -> Result<(Url, String), reqwest::Error> {
        let response = self.client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let final_url = response.url().clone();
        let body = response.text().await?;
        Ok((final_url, body))
    }

    pub async fn get_arxiv_results(&mut self) -> Result<Vec<PaperRecord>, CrawlError> {
        let mut results: Vec<PaperRecord> = Vec::new();
        for (page, url) in self.listing_urls()?.into_iter().enumerate() {
            let (page_url, html) = match self.get_raw_html(&url).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    error!(url = %url, "failed to fetch listing page: {}", e);
                    continue;
                }
            };
            let listing = self.parser.parse_page(&html, &page_url);
            let source = listing.source_category().to_string();
            let before = results.len();
            results.extend(listing);
            info!(page, source = %source, documents = results.len() - before, "listing page done");
        }
        Ok(results)
    }

    pub fn parser(&self) -> &ListingParser {
        &self.parser
    }
}

// Keeps any path prefix of the base url, e.g. a mirror served under /arxiv.
fn site_root(base_url: &Url) -> Url {
    let mut root = base_url.clone();
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }
    root
}
