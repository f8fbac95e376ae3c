//! Fixture for registry record test data.
//!
//! Provides fixture methods for creating in-memory record JSON objects without
//! writing them to disk. Used for seeding registries and for parsing tests.

use serde_json::{json, Map, Value};

/// Default test member Discord ID.
pub const DEFAULT_DISCORD_ID: &str = "123456789";

/// Default test VRChat username.
pub const DEFAULT_VRCHAT_USERNAME: &str = "TestUser";

/// Default test allowed role ID.
pub const DEFAULT_ROLE_ID: u64 = 987654321;

/// Creates a record JSON object with default values.
///
/// Discord ID defaults to "123456789", username to "TestUser" and roles to
/// `[987654321]`.
///
/// # Returns
/// - `Value` - JSON object in the on-disk record shape
///
/// # Example
/// ```rust,ignore
/// let record = fixture::record::json();
/// assert_eq!(record["discord_id"], "123456789");
/// ```
pub fn json() -> Value {
    json_builder().build()
}

/// Creates a customizable record JSON builder.
///
/// Use this when you need to override default values or build a legacy record
/// without a `roles` field.
///
/// # Returns
/// - `RecordJsonBuilder` - Builder with default values
pub fn json_builder() -> RecordJsonBuilder {
    RecordJsonBuilder::default()
}

/// Builder for record JSON objects.
pub struct RecordJsonBuilder {
    discord_id: String,
    vrchat_username: String,
    roles: Option<Vec<u64>>,
}

impl Default for RecordJsonBuilder {
    fn default() -> Self {
        Self {
            discord_id: DEFAULT_DISCORD_ID.to_string(),
            vrchat_username: DEFAULT_VRCHAT_USERNAME.to_string(),
            roles: Some(vec![DEFAULT_ROLE_ID]),
        }
    }
}

impl RecordJsonBuilder {
    /// Sets the Discord ID.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as a decimal string
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the VRChat username.
    pub fn vrchat_username(mut self, vrchat_username: impl Into<String>) -> Self {
        self.vrchat_username = vrchat_username.into();
        self
    }

    /// Sets the stored roles.
    pub fn roles(mut self, roles: &[u64]) -> Self {
        self.roles = Some(roles.to_vec());
        self
    }

    /// Omits the `roles` field, as in records written before role tracking.
    pub fn legacy(mut self) -> Self {
        self.roles = None;
        self
    }

    /// Builds the record JSON object.
    ///
    /// Keys are inserted in on-disk order: `discord_id`, `vrchat_username`, `roles`.
    ///
    /// # Returns
    /// - `Value` - JSON object with configured values
    pub fn build(self) -> Value {
        let mut object = Map::new();
        object.insert("discord_id".to_string(), json!(self.discord_id));
        object.insert("vrchat_username".to_string(), json!(self.vrchat_username));
        if let Some(roles) = self.roles {
            object.insert("roles".to_string(), json!(roles));
        }
        Value::Object(object)
    }
}
