//! Basic account and transfer usage example

use account_ledger::utils::MemoryStore;
use account_ledger::{CallerId, Ledger};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("💸 Account Ledger - Basic Transfer Example\n");

    // Create a ledger over in-memory storage
    let mut ledger = Ledger::new(MemoryStore::new());

    let alice = CallerId::new("Org1MSP", "alice@org1.example.com");
    let bob = CallerId::new("Org1MSP", "bob@org1.example.com");

    // 1. Open two accounts
    println!("📂 Opening accounts...");
    ledger.init_account(&alice, "alice-savings", "100").await?;
    println!("  ✓ alice-savings opened with 100");
    ledger.init_account(&bob, "bob-savings", "20").await?;
    println!("  ✓ bob-savings opened with 20");
    println!();

    // 2. Move funds between owners
    println!("💸 Transferring 40 from alice-savings to bob-savings...");
    ledger
        .transfer(&alice, "alice-savings", "bob-savings", "40")
        .await?;
    println!("  ✓ Transfer applied");
    println!();

    // 3. Each owner sees only their own accounts
    println!("🔍 Listing accounts per owner...");
    for account in ledger.list_accounts(&alice).await? {
        println!(
            "  {} owns {}: balance {}",
            alice, account.id, account.balance
        );
    }
    for account in ledger.list_accounts(&bob).await? {
        println!("  {} owns {}: balance {}", bob, account.id, account.balance);
    }
    println!();

    // 4. Wrong owner and overdrafts are rejected
    println!("🚫 Demonstrating rejected operations...");
    let err = ledger
        .set_balance(&bob, "alice-savings", "0")
        .await
        .unwrap_err();
    println!("  ✓ Non-owner set_balance rejected: {}", err);

    let err = ledger
        .transfer(&alice, "alice-savings", "bob-savings", "1000")
        .await
        .unwrap_err();
    println!("  ✓ Overdraft rejected: {}", err);

    println!("\n🎉 Example completed successfully!");
    Ok(())
}
