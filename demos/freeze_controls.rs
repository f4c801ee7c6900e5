//! Admin freeze and unfreeze example

use account_ledger::utils::MemoryStore;
use account_ledger::{CallerId, Ledger, LedgerError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("🧊 Account Ledger - Freeze Controls Example\n");

    let mut ledger = Ledger::new(MemoryStore::new());

    let carol = CallerId::new("Org1MSP", "carol@org1.example.com");
    let admin = CallerId::new("Org1MSP", "admin@org1.example.com");

    // 1. Carol opens an account
    println!("📂 Opening account...");
    ledger.init_account(&carol, "carol-main", "250").await?;
    println!("  ✓ carol-main opened with 250\n");

    // 2. Only an admin identity may freeze
    println!("🧊 Freezing carol-main...");
    match ledger.freeze_account(&carol, "carol-main").await {
        Err(LedgerError::AdminRequired(reason)) => {
            println!("  ✓ Owner cannot freeze their own account: {}", reason)
        }
        other => println!("  unexpected outcome: {:?}", other),
    }
    ledger.freeze_account(&admin, "carol-main").await?;
    println!("  ✓ Admin froze carol-main\n");

    // 3. A frozen account rejects every mutation but stays readable
    println!("🚫 Mutations while frozen...");
    let err = ledger
        .set_balance(&carol, "carol-main", "0")
        .await
        .unwrap_err();
    println!("  ✓ set_balance rejected: {}", err);

    for account in ledger.list_accounts(&carol).await? {
        println!(
            "  still visible: {} (frozen: {})",
            account.id, account.frozen
        );
    }
    println!();

    // 4. Unfreeze and resume
    println!("🔓 Unfreezing carol-main...");
    ledger.unfreeze_account(&admin, "carol-main").await?;
    ledger.set_balance(&carol, "carol-main", "300").await?;
    println!("  ✓ Balance updated after unfreeze");

    println!("\n🎉 Example completed successfully!");
    Ok(())
}
