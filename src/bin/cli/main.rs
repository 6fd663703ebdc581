use anyhow::{Context, Result};
use brand_catalog_server::adapters::inbound::http::{
    dto::{BrandRequestDto, BrandResponseDto, ErrorResponseDto},
    router::BRANDS_PATH,
};
use clap::{Parser, Subcommand};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Parser, Debug)]
#[command(name = "brand-catalog-cli")]
#[command(about = "CLI for interacting with the brand catalog server", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(short, long, env = "BRAND_CATALOG_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Create a brand
    Create {
        /// Brand name
        name: String,
    },

    /// Show a single brand
    Get {
        /// Brand id
        id: String,
    },

    /// List all brands
    List,

    /// Rename a brand
    Update {
        /// Brand id
        id: String,
        /// New brand name
        name: String,
    },

    /// Delete a brand
    Delete {
        /// Brand id
        id: String,
    },
}

/// Thin HTTP client over the brand endpoints
struct BrandCatalogClient {
    http: Client,
    base_url: String,
}

impl BrandCatalogClient {
    fn new(server_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: format!("{}{}", server_url.trim_end_matches('/'), BRANDS_PATH),
        }
    }

    fn brand_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn create(&self, name: String) -> Result<BrandResponseDto> {
        let response = self
            .http
            .post(&self.base_url)
            .json(&BrandRequestDto::new(name))
            .send()
            .await?;
        read_json(response).await
    }

    async fn get(&self, id: &str) -> Result<BrandResponseDto> {
        let response = self.http.get(self.brand_url(id)).send().await?;
        read_json(response).await
    }

    async fn list(&self) -> Result<Vec<BrandResponseDto>> {
        let response = self.http.get(&self.base_url).send().await?;
        read_json(response).await
    }

    async fn update(&self, id: &str, name: String) -> Result<BrandResponseDto> {
        let response = self
            .http
            .put(self.brand_url(id))
            .json(&BrandRequestDto::new(name))
            .send()
            .await?;
        read_json(response).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let response = self.http.delete(self.brand_url(id)).send().await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(());
        }
        Err(server_error(response).await)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(server_error(response).await);
    }
    response
        .json::<T>()
        .await
        .context("Failed to decode server response")
}

async fn server_error(response: Response) -> anyhow::Error {
    let status = response.status();
    match response.json::<ErrorResponseDto>().await {
        Ok(body) => anyhow::anyhow!("{} ({}): {}", body.error, status, body.message),
        Err(_) => anyhow::anyhow!("Server responded with {}", status),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = BrandCatalogClient::new(&cli.url);

    match cli.command {
        Commands::Create { name } => print_json(&client.create(name).await?)?,
        Commands::Get { id } => print_json(&client.get(&id).await?)?,
        Commands::List => print_json(&client.list().await?)?,
        Commands::Update { id, name } => print_json(&client.update(&id, name).await?)?,
        Commands::Delete { id } => {
            client.delete(&id).await?;
            println!("Deleted brand {}", id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "brand-catalog-cli",
            "--url",
            "http://catalog:8080/",
            "update",
            "550e8400-e29b-41d4-a716-446655440000",
            "Acme",
        ]);

        assert_eq!(cli.url, "http://catalog:8080/");
        assert_eq!(
            cli.command,
            Commands::Update {
                id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
                name: "Acme".to_string(),
            }
        );
    }

    #[test]
    fn test_client_urls() {
        let client = BrandCatalogClient::new("http://catalog:8080/");

        assert_eq!(client.base_url, "http://catalog:8080/api/v1/brands");
        assert_eq!(client.brand_url("abc"), "http://catalog:8080/api/v1/brands/abc");
    }
}
