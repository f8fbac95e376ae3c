use super::*;

/// Tests saving a registry when no file exists yet.
///
/// Expected: Ok with the file created and containing the record
#[tokio::test]
async fn creates_file_when_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let path = test.registry_path();

    let registry = Registry::new(vec![Record::new(100, "Alice", vec![1])]);
    RegistryRepository::new(&path).save(&registry).await.unwrap();

    let json = test.registry_json().await?;
    assert_eq!(json[0]["discord_id"], "100");
    assert_eq!(json[0]["vrchat_username"], "Alice");
    assert_eq!(json[0]["roles"][0], 1);

    Ok(())
}

/// Tests the exact on-disk layout of a saved registry.
///
/// Expected: Four-space indentation, fixed key order, no trailing newline
#[tokio::test]
async fn writes_deterministic_layout() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let path = test.registry_path();

    let registry = Registry::new(vec![Record::new(100, "Alice", vec![7, 8])]);
    RegistryRepository::new(&path).save(&registry).await.unwrap();

    let contents = String::from_utf8(test.registry_bytes().await?).unwrap();
    assert_eq!(
        contents,
        "[\n    {\n        \"discord_id\": \"100\",\n        \"vrchat_username\": \"Alice\",\n        \"roles\": [\n            7,\n            8\n        ]\n    }\n]"
    );

    Ok(())
}

/// Tests that saving immediately after loading reproduces the file byte for byte.
///
/// Expected: Identical bytes before and after, including legacy records and escapes
#[tokio::test]
async fn load_then_save_is_byte_identical() -> Result<(), TestError> {
    let contents = "[\n    {\n        \"discord_id\": \"100\",\n        \"vrchat_username\": \"Zo\\u00eb\",\n        \"roles\": [\n            1433955314356584540\n        ]\n    },\n    {\n        \"discord_id\": \"200\",\n        \"vrchat_username\": \"Legacy\"\n    },\n    {\n        \"discord_id\": \"300\",\n        \"vrchat_username\": \"\",\n        \"roles\": []\n    }\n]";
    let test = TestBuilder::new()
        .with_raw_registry(contents)
        .build()
        .await?;
    let path = test.registry_path();
    let repo = RegistryRepository::new(&path);

    let registry = repo.load().await.unwrap();
    assert_eq!(registry.len(), 3);
    repo.save(&registry).await.unwrap();

    assert_eq!(test.registry_bytes().await?, contents.as_bytes());

    Ok(())
}

/// Tests that keys and elements this bot does not know about survive a save.
///
/// Expected: Identical bytes before and after, extra keys and mismatched entries included
#[tokio::test]
async fn unknown_keys_and_entries_round_trip_unchanged() -> Result<(), TestError> {
    let contents = "[\n    {\n        \"discord_id\": \"1\",\n        \"vrchat_username\": \"Alice\",\n        \"roles\": [\n            5\n        ],\n        \"note\": \"keep me\",\n        \"meta\": {\n            \"source\": \"import\"\n        }\n    },\n    {\n        \"discord_id\": 2,\n        \"vrchat_username\": \"Bob\"\n    }\n]";
    let test = TestBuilder::new()
        .with_raw_registry(contents)
        .build()
        .await?;
    let path = test.registry_path();
    let repo = RegistryRepository::new(&path);

    let registry = repo.load().await.unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.find(1).unwrap().extra["note"], "keep me");
    repo.save(&registry).await.unwrap();

    assert_eq!(test.registry_bytes().await?, contents.as_bytes());

    Ok(())
}

/// Tests that fixture-seeded files also round-trip unchanged.
///
/// Expected: Identical bytes before and after
#[tokio::test]
async fn seeded_records_round_trip_unchanged() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record(fixture::record::json())
        .with_record(fixture::record::json_builder().discord_id("1").legacy().build())
        .build()
        .await?;
    let path = test.registry_path();
    let before = test.registry_bytes().await?;

    let repo = RegistryRepository::new(&path);
    let registry = repo.load().await.unwrap();
    repo.save(&registry).await.unwrap();

    assert_eq!(test.registry_bytes().await?, before);

    Ok(())
}

/// Tests saving an empty registry.
///
/// Expected: File contains an empty JSON array
#[tokio::test]
async fn writes_empty_array() -> Result<(), TestError> {
    let test = TestBuilder::new().with_record(fixture::record::json()).build().await?;
    let path = test.registry_path();

    RegistryRepository::new(&path)
        .save(&Registry::default())
        .await
        .unwrap();

    assert_eq!(test.registry_bytes().await?, b"[]");

    Ok(())
}

/// Tests that no temporary file is left next to the registry after saving.
///
/// Expected: Only the registry file remains in the directory
#[tokio::test]
async fn leaves_no_temporary_file() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let path = test.registry_path();

    RegistryRepository::new(&path)
        .save(&Registry::new(vec![Record::new(1, "a", vec![])]))
        .await
        .unwrap();

    let mut entries = tokio::fs::read_dir(test.repo_path()).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    assert_eq!(names, vec!["whitelist.json".to_string()]);

    Ok(())
}

/// Tests saving into a directory that does not exist.
///
/// Expected: Err(PersistenceError::Write) and nothing created
#[tokio::test]
async fn fails_when_directory_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let path = test.root().join("missing").join("whitelist.json");

    let result = RegistryRepository::new(&path)
        .save(&Registry::default())
        .await;

    assert!(matches!(result, Err(PersistenceError::Write { .. })));
    assert!(!path.exists());

    Ok(())
}
