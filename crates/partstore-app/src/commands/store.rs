//! partstore store command

use std::path::PathBuf;

use clap::Args;
use partstore_domain::StorePartsRepository;
use partstore_usecase::StorePartsUseCase;
use serde_json::json;
use tracing::info;

#[derive(Debug, Args)]
pub struct StoreCommand {
    /// Payload files, processed in order
    #[arg(required = true)]
    pub payloads: Vec<PathBuf>,
}

impl StoreCommand {
    /// Run every payload and print one JSON line per file.
    /// Returns the number of rejected payloads.
    pub async fn run(
        &self,
        use_case: &StorePartsUseCase<dyn StorePartsRepository>,
    ) -> anyhow::Result<usize> {
        let mut rejected = 0;

        for path in &self.payloads {
            let file = path.display().to_string();
            let json = tokio::fs::read_to_string(path).await?;

            let line = match use_case.execute_json(&json).await {
                Ok(outcome) => json!({ "file": file, "stored": outcome }),
                Err(err) => {
                    rejected += 1;
                    json!({ "file": file, "error": err.to_string() })
                }
            };
            println!("{}", line);
        }

        let repo = use_case.repository();
        info!(
            suppliers = repo.list_suppliers().await.len(),
            parts = repo.list_parts().await.len(),
            rejected,
            "Payloads processed"
        );
        Ok(rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partstore_adapter::InMemoryStorePartsRepository;
    use std::io::Write;
    use std::sync::Arc;

    fn payload(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", body).unwrap();
        file
    }

    #[tokio::test]
    async fn test_store_counts_rejections() {
        let repository: Arc<dyn StorePartsRepository> =
            Arc::new(InMemoryStorePartsRepository::new());
        let use_case = StorePartsUseCase::new(repository);

        let good = payload(
            r#"{ "loader": { "loaderId": "12345", "loaderName": "Acme" },
                 "parts": [ { "type": "wheel", "diameter": 22, "material": "rubber" } ] }"#,
        );
        let conflicting = payload(
            r#"{ "loader": { "loaderId": "12345", "loaderName": "Acme" },
                 "parts": [ { "type": "door", "height": 2.1, "width": 0.9, "material": "steel" } ] }"#,
        );

        let cmd = StoreCommand {
            payloads: vec![good.path().to_path_buf(), conflicting.path().to_path_buf()],
        };

        let rejected = cmd.run(&use_case).await.unwrap();
        assert_eq!(rejected, 1);
        assert_eq!(use_case.repository().list_parts().await.len(), 1);
        assert_eq!(use_case.repository().list_suppliers().await.len(), 1);
    }
}
