use std::sync::Arc;

use test_utils::{builder::TestBuilder, context::TestContext, error::TestError, fixture};

use crate::{
    bot::command::{self, register, unregister},
    data::git::GitClient,
    model::allow_list::AllowList,
    service::{
        publish::{history::PublishHistory, PublishService},
        registry::RegistryService,
    },
};

const ROLE: u64 = 1433955314356584540;

fn service(test: &TestContext) -> RegistryService {
    let publisher = PublishService::new(
        GitClient::new(test.repo_path(), std::time::Duration::from_secs(5)),
        None,
        PublishHistory::default(),
    );
    RegistryService::new(test.registry_path(), AllowList::new([ROLE]), Arc::new(publisher))
}

/// Tests the command definitions sent to Discord.
///
/// Expected: register has a required string `username` option, unregister has none
#[test]
fn defines_register_and_unregister() {
    let commands: Vec<serde_json::Value> = command::all()
        .iter()
        .map(|c| serde_json::to_value(c).unwrap())
        .collect();

    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0]["name"], "register");
    assert_eq!(commands[0]["description"], "Register your VRChat username");
    assert_eq!(commands[0]["options"][0]["name"], "username");
    assert_eq!(commands[0]["options"][0]["required"], true);
    // 3 = STRING
    assert_eq!(commands[0]["options"][0]["type"], 3);
    assert_eq!(commands[1]["name"], "unregister");
    assert_eq!(commands[1]["description"], "Unregister your VRChat username");
}

/// Tests the reply for a successful registration.
///
/// Expected: Success message quoting the username
#[tokio::test]
async fn register_replies_success() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let service = service(&test);

    let reply = register::run(&service, 100, &[ROLE], Some("Alice")).await;

    assert_eq!(reply, "✅ VRChat username `Alice` registered successfully!");

    Ok(())
}

/// Tests the reply when the member is already registered.
///
/// Expected: Error message quoting the stored username
#[tokio::test]
async fn register_replies_already_registered() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record(
            fixture::record::json_builder()
                .discord_id("100")
                .vrchat_username("Alice")
                .build(),
        )
        .build()
        .await?;
    let service = service(&test);

    let reply = register::run(&service, 100, &[ROLE], Some("Bob")).await;

    assert_eq!(
        reply,
        "❌ Already registered as `Alice`! Use `/unregister` first."
    );

    Ok(())
}

/// Tests the reply for a member without an allowed role.
///
/// Expected: Permission denied message
#[tokio::test]
async fn register_replies_permission_denied() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let service = service(&test);

    let reply = register::run(&service, 100, &[], Some("Alice")).await;

    assert_eq!(reply, "❌ You do not have permission to register.");

    Ok(())
}

/// Tests the reply when the registry cannot be saved.
///
/// Expected: Generic failure message without file details
#[tokio::test]
async fn register_replies_generic_failure() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let publisher = PublishService::new(
        GitClient::new(test.repo_path(), std::time::Duration::from_secs(5)),
        None,
        PublishHistory::default(),
    );
    let service = RegistryService::new(
        test.root().join("missing").join("whitelist.json"),
        AllowList::new([ROLE]),
        Arc::new(publisher),
    );

    let reply = register::run(&service, 100, &[ROLE], Some("Alice")).await;

    assert_eq!(
        reply,
        "❌ Something went wrong saving the whitelist, please try again later."
    );

    Ok(())
}

/// Tests the unregister replies.
///
/// Expected: Success for a registered member, not-registered afterwards
#[tokio::test]
async fn unregister_replies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record(fixture::record::json_builder().discord_id("100").build())
        .build()
        .await?;
    let service = service(&test);

    assert_eq!(
        unregister::run(&service, 100).await,
        "✅ You have been unregistered."
    );
    assert_eq!(
        unregister::run(&service, 100).await,
        "❌ You are not registered yet!"
    );

    Ok(())
}
