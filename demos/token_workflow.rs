use alchemy_chain_sdk::{
    connect, AccountInfo, ClientConfig, ResponseExt, TokenIssuer, TokenManager, TokenReader,
};

const DEMO_KEY: &str = "1234567890123456789012345678901234567890123456789012345678901234";
const HOLDER: &str = "0x1234567890123456789012345678901234567890";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Prefer ALCHEMY_RPC_URL / ALCHEMY_PRIVATE_KEY (or a .env file) when present
    let config = ClientConfig::from_env_file("alchemy").unwrap_or_else(|_| {
        ClientConfig::new("http://localhost:8545".to_string(), DEMO_KEY.to_string())
    });
    let client = connect(&config.base_url, config.private_key())?;

    let address = client.signer_address()?;
    println!("💰 Querying balance of {}", address);

    let _ = client
        .get_balance(&address)
        .await
        .on_success(|b| println!("💵 {} ETH ({} wei)", b.eth, b.wei))
        .on_error(|e| println!("❌ Balance query failed: {}", e));

    // Creating a token is the only way to obtain a token address
    let issued = match client
        .create_token("My Token", "MTK", 8, "0xa6459EF31C68DCF46cC603C526526DB1C6eE4fD1")
        .await
    {
        Ok(issued) => {
            println!("✅ Token {} created in {}", issued.token, issued.hash);
            issued
        }
        Err(e) => {
            println!("❌ Token creation failed: {}", e);
            return Ok(());
        }
    };
    let token = issued.token.as_str();

    let _ = client
        .get_token_metadata(token)
        .await
        .on_success(|m| {
            println!(
                "📊 {} ({}) decimals={} supply={} paused={}",
                m.name, m.symbol, m.decimals, m.supply, m.is_paused
            );
        })
        .on_error(|e| println!("Failed to get metadata: {}", e));

    let steps = [
        ("mint", client.mint(token, HOLDER, "1000000000000000000", 1).await),
        ("grant", client.grant_authority(token, "MINT_ROLE", HOLDER, 2).await),
        ("update", client.update_metadata(token, "Updated Token Name", "UPD", 3).await),
        ("revoke", client.revoke_authority(token, "MINT_ROLE", HOLDER, 4).await),
        ("burn", client.admin_burn(token, HOLDER, "500000000000000000", 5).await),
        ("pause", client.pause(token, 6).await),
        ("unpause", client.unpause(token, 7).await),
        (
            "blacklist",
            client
                .add_to_blacklist(token, "0x9999999999999999999999999999999999999999", 8)
                .await,
        ),
    ];

    for (name, result) in steps {
        match result {
            Ok(tx) => println!("✔ {}: {}", name, tx.hash),
            Err(e) => println!("✘ {} failed: {}", name, e),
        }
    }

    println!("🎉 Workflow finished for token {}", token);
    Ok(())
}
