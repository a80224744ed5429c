//! partstore demo command
//!
//! Walks the store through a cascade delete and a rollback.

use anyhow::ensure;
use clap::Args;
use partstore_domain::{PartType, StorePartsRepository};
use tracing::info;

#[derive(Debug, Args)]
pub struct DemoCommand {
    /// Part type used in the walkthrough (wheel, door, window)
    #[arg(long, default_value = "wheel")]
    pub part_type: PartType,
}

impl DemoCommand {
    pub async fn run(&self, repo: &dyn StorePartsRepository) -> anyhow::Result<()> {
        repo.reset_store().await?;

        info!("Cascade delete");
        let supplier = repo.insert_supplier("Supplier A").await;
        info!("   inserted supplier {} ({})", supplier.name(), supplier.id());

        let part = repo
            .insert_part(self.part_type, "rubber", supplier.id())
            .await
            .ok_or_else(|| anyhow::anyhow!("supplier {} not found", supplier.id()))?;
        info!("   inserted {} part {}", part.part_type(), part.id());

        ensure!(repo.delete_supplier(supplier.id()).await, "delete failed");
        ensure!(
            repo.get_parts_by_supplier_id(supplier.id()).await.is_empty(),
            "parts survived their supplier"
        );
        ensure!(repo.get_supplier_by_id(supplier.id()).await.is_none());
        info!("   supplier {} and its parts are gone", supplier.id());

        info!("Rollback");
        let before = repo.list_suppliers().await.len();
        repo.begin_transaction().await?;
        repo.insert_supplier("Supplier B").await;
        info!("   {} suppliers inside the transaction", repo.list_suppliers().await.len());
        repo.rollback_transaction().await?;

        let after = repo.list_suppliers().await.len();
        ensure!(before == after, "rollback left {} suppliers, expected {}", after, before);
        info!("   back to {} suppliers", after);

        repo.reset_store().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partstore_adapter::InMemoryStorePartsRepository;

    #[tokio::test]
    async fn test_demo_leaves_store_empty() {
        let repo = InMemoryStorePartsRepository::new();

        DemoCommand {
            part_type: PartType::Wheel,
        }
        .run(&repo)
        .await
        .unwrap();

        assert!(repo.list_suppliers().await.is_empty());
        assert!(!repo.is_transaction_active().await);
    }

    #[derive(Debug, clap::Parser)]
    struct DemoCli {
        #[command(flatten)]
        demo: DemoCommand,
    }

    #[test]
    fn test_demo_part_type_flag() {
        use clap::Parser;

        let cli = DemoCli::try_parse_from(["demo"]).unwrap();
        assert_eq!(cli.demo.part_type, PartType::Wheel);

        let cli = DemoCli::try_parse_from(["demo", "--part-type", "window"]).unwrap();
        assert_eq!(cli.demo.part_type, PartType::Window);

        assert!(DemoCli::try_parse_from(["demo", "--part-type", "roof"]).is_err());
    }
}
