use super::*;

/// Tests unregistering a registered member.
///
/// Expected: Ok with the removed record, store empty, published once
#[tokio::test]
async fn removes_registered_member() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record(
            fixture::record::json_builder()
                .discord_id("100")
                .vrchat_username("Alice")
                .build(),
        )
        .build()
        .await?;
    let publisher = RecordingPublisher::new();
    let service = service(&test, publisher.clone());

    let removed = service.unregister(100).await.unwrap();

    assert_eq!(removed.vrchat_username, "Alice");
    assert_eq!(test.registry_json().await?, serde_json::json!([]));
    assert_eq!(publisher.calls(), 1);

    Ok(())
}

/// Tests unregistering a member without a record.
///
/// Expected: Err(NotRegistered), store unchanged, nothing published
#[tokio::test]
async fn rejects_unknown_member() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record(fixture::record::json_builder().discord_id("100").build())
        .build()
        .await?;
    let before = test.registry_bytes().await?;
    let publisher = RecordingPublisher::new();
    let service = service(&test, publisher.clone());

    let result = service.unregister(999).await;

    assert!(matches!(result, Err(RegistryError::NotRegistered)));
    assert_eq!(test.registry_bytes().await?, before);
    assert_eq!(publisher.calls(), 0);

    Ok(())
}

/// Tests unregistering when no registry file exists.
///
/// Expected: Err(NotRegistered) and no file created
#[tokio::test]
async fn rejects_when_store_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let service = service(&test, RecordingPublisher::new());

    let result = service.unregister(100).await;

    assert!(matches!(result, Err(RegistryError::NotRegistered)));
    assert!(!test.registry_path().exists());

    Ok(())
}

/// Tests that other members' records survive an unregistration untouched.
///
/// Expected: Remaining records keep their order and fields
#[tokio::test]
async fn keeps_other_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record(fixture::record::json_builder().discord_id("1").legacy().build())
        .with_record(fixture::record::json_builder().discord_id("2").build())
        .with_record(fixture::record::json_builder().discord_id("3").build())
        .build()
        .await?;
    let service = service(&test, RecordingPublisher::new());

    service.unregister(2).await.unwrap();

    let expected = test_utils::builder::render_records(&[
        fixture::record::json_builder().discord_id("1").legacy().build(),
        fixture::record::json_builder().discord_id("3").build(),
    ])?;
    assert_eq!(test.registry_bytes().await?, expected);

    Ok(())
}

/// Tests the register/unregister state machine for a single member.
///
/// Each step must follow Unregistered -> Registered -> Unregistered strictly.
///
/// Expected: Double registration and double unregistration are both rejected
#[tokio::test]
async fn follows_registration_state_machine() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let service = service(&test, RecordingPublisher::new());

    assert!(matches!(
        service.unregister(100).await,
        Err(RegistryError::NotRegistered)
    ));
    assert!(service.register(100, &[ROLE_A], "Alice").await.is_ok());
    assert!(matches!(
        service.register(100, &[ROLE_A], "Alice").await,
        Err(RegistryError::AlreadyRegistered { .. })
    ));
    assert!(service.unregister(100).await.is_ok());
    assert!(matches!(
        service.unregister(100).await,
        Err(RegistryError::NotRegistered)
    ));
    assert!(service.register(100, &[ROLE_B], "Alice2").await.is_ok());

    let json = test.registry_json().await?;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["vrchat_username"], "Alice2");

    Ok(())
}
