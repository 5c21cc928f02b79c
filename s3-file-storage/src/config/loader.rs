/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Credentials;
use aws_types::region::Region;

use crate::config::{Builder, REGION};
use crate::error::{self, ErrorKind};
use crate::Config;

/// Environment variable holding the access key id
pub const ACCESS_KEY_ID_ENV: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret access key
pub const SECRET_ACCESS_KEY_ENV: &str = "AWS_SECRET_ACCESS_KEY";
/// Environment variable holding the bucket name
pub const BUCKET_NAME_ENV: &str = "AWS_S3_BUCKET_NAME";

const CREDENTIALS_PROVIDER_NAME: &str = "s3-file-storage-static";

/// Raw configuration values the client is built from.
///
/// Every value defaults to the empty string when it is not configured.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Settings {
    access_key_id: String,
    secret_access_key: String,
    bucket: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("bucket", &self.bucket)
            .finish()
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            access_key_id: lookup(ACCESS_KEY_ID_ENV).unwrap_or_default(),
            secret_access_key: lookup(SECRET_ACCESS_KEY_ENV).unwrap_or_default(),
            bucket: lookup(BUCKET_NAME_ENV).unwrap_or_default(),
        }
    }

    /// The access key id
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Names of the settings that are empty.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (ACCESS_KEY_ID_ENV, &self.access_key_id),
            (SECRET_ACCESS_KEY_ENV, &self.secret_access_key),
            (BUCKET_NAME_ENV, &self.bucket),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Load storage [`Config`] from the environment.
///
/// Values that are not configured fall back to the empty string. By default this is not an
/// error: a warning is logged and the misconfiguration only surfaces when Amazon S3 rejects
/// the first request. Call [`require_settings`](ConfigLoader::require_settings) to fail at
/// load time instead.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    bucket: Option<String>,
    require_settings: bool,
}

impl ConfigLoader {
    /// Override the access key id read from the environment.
    pub fn access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Override the secret access key read from the environment.
    pub fn secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Override the bucket name read from the environment.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Fail [`load`](ConfigLoader::load) when any setting is empty.
    ///
    /// Default is `false`.
    pub fn require_settings(mut self, require: bool) -> Self {
        self.require_settings = require;
        self
    }

    fn resolve(self, env: Settings) -> (Settings, bool) {
        let settings = Settings {
            access_key_id: self.access_key_id.unwrap_or(env.access_key_id),
            secret_access_key: self.secret_access_key.unwrap_or(env.secret_access_key),
            bucket: self.bucket.unwrap_or(env.bucket),
        };
        (settings, self.require_settings)
    }

    /// Load the configuration
    ///
    /// Explicit overrides take precedence over the environment. The resulting client uses static
    /// credentials and the fixed [`REGION`].
    pub async fn load(self) -> Result<Config, error::Error> {
        let (settings, require_settings) = self.resolve(Settings::from_env());
        load_with_settings(settings, require_settings).await
    }
}

async fn load_with_settings(
    settings: Settings,
    require_settings: bool,
) -> Result<Config, error::Error> {
    let missing = settings.missing();
    if !missing.is_empty() {
        if require_settings {
            return Err(error::Error::new(
                ErrorKind::ConfigurationInvalid,
                format!("missing required settings: {}", missing.join(", ")),
            ));
        }
        for name in &missing {
            tracing::warn!("{name} is not set; falling back to an empty value");
        }
    }

    let credentials = Credentials::new(
        settings.access_key_id,
        settings.secret_access_key,
        None,
        None,
        CREDENTIALS_PROVIDER_NAME,
    );

    let shared_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::from_static(REGION))
        .credentials_provider(credentials)
        .load()
        .await;
    tracing::debug!(
        "storage client configured for bucket {:?} in {REGION}",
        settings.bucket
    );

    let client = aws_sdk_s3::Client::new(&shared_config);
    Ok(Builder::default()
        .bucket(settings.bucket)
        .client(client)
        .build())
}
