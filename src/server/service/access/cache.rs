//! Cache port for resolved affiliation sets.
//!
//! Resolved sets are cached for a short TTL under a key derived from the
//! query (user, permission, corporate-role filter) and tagged so mutations
//! can invalidate exactly the entries they affect: ownership changes
//! invalidate the user tag, rule changes invalidate the owning role's tag.
//! The engine works identically with no cache attached.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use fred::prelude::*;

use crate::server::{error::Error, service::access::ownership::CorporationRoleFilter};

/// How long a resolved affiliation set stays cached.
pub const ACCESS_CACHE_TTL_SECONDS: i64 = 120;

static CACHE_TAG_PREFIX: &str = "heimdall:access:tag:";

/// Key for one resolved (user, permission, filter) query.
pub fn affiliation_cache_key(
    user_id: i32,
    permission: &str,
    filter: Option<&CorporationRoleFilter>,
) -> String {
    match filter {
        Some(filter) => format!(
            "affiliation:{}:{}:{}",
            user_id,
            permission,
            filter.cache_key_part()
        ),
        None => format!("affiliation:{}:{}", user_id, permission),
    }
}

/// Tag shared by every cached resolution for a user.
pub fn user_cache_tag(user_id: i32) -> String {
    format!("user:{}", user_id)
}

/// Tag shared by every cached resolution a role's rules contributed to.
pub fn role_cache_tag(role_id: i32) -> String {
    format!("role:{}", role_id)
}

#[async_trait]
pub trait AccessCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, Error>;

    async fn put(
        &self,
        key: &str,
        value: String,
        ttl_seconds: i64,
        tags: &[String],
    ) -> Result<(), Error>;

    /// Drop every entry carrying the tag.
    async fn invalidate_tag(&self, tag: &str) -> Result<(), Error>;
}

/// Access cache backed by Valkey/Redis through a fred connection pool.
///
/// Values are plain SET-with-expiry entries; each tag is a Redis set holding
/// the keys it covers. Tag sets may reference already-expired keys, which
/// makes invalidation a harmless DEL.
pub struct ValkeyAccessCache {
    pool: Pool,
}

impl ValkeyAccessCache {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    fn tag_key(tag: &str) -> String {
        format!("{}{}", CACHE_TAG_PREFIX, tag)
    }
}

#[async_trait]
impl AccessCache for ValkeyAccessCache {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let value: Option<String> = self.pool.get(key).await?;

        Ok(value)
    }

    async fn put(
        &self,
        key: &str,
        value: String,
        ttl_seconds: i64,
        tags: &[String],
    ) -> Result<(), Error> {
        let _: () = self
            .pool
            .set(
                key,
                value,
                Some(fred::types::Expiration::EX(ttl_seconds)),
                None,
                false,
            )
            .await?;

        for tag in tags {
            let _: () = self.pool.sadd(Self::tag_key(tag), key).await?;
        }

        Ok(())
    }

    async fn invalidate_tag(&self, tag: &str) -> Result<(), Error> {
        let tag_key = Self::tag_key(tag);

        let keys: Vec<String> = self.pool.smembers(&tag_key).await?;
        if !keys.is_empty() {
            let _: () = self.pool.del(keys).await?;
        }
        let _: () = self.pool.del(&tag_key).await?;

        Ok(())
    }
}

struct MemoryEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-process access cache used when no Valkey URL is configured, and by
/// tests exercising cache behavior without a running Valkey.
#[derive(Default)]
pub struct MemoryAccessCache {
    entries: Mutex<HashMap<String, MemoryEntry>>,
    tags: Mutex<HashMap<String, HashSet<String>>>,
}

impl MemoryAccessCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccessCache for MemoryAccessCache {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let mut entries = self.entries.lock().unwrap();

        match entries.get(key) {
            Some(entry) if entry.expires_at > Utc::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn put(
        &self,
        key: &str,
        value: String,
        ttl_seconds: i64,
        tags: &[String],
    ) -> Result<(), Error> {
        self.entries.lock().unwrap().insert(
            key.to_string(),
            MemoryEntry {
                value,
                expires_at: Utc::now() + Duration::seconds(ttl_seconds),
            },
        );

        let mut tag_index = self.tags.lock().unwrap();
        for tag in tags {
            tag_index
                .entry(tag.clone())
                .or_default()
                .insert(key.to_string());
        }

        Ok(())
    }

    async fn invalidate_tag(&self, tag: &str) -> Result<(), Error> {
        let Some(keys) = self.tags.lock().unwrap().remove(tag) else {
            return Ok(());
        };

        let mut entries = self.entries.lock().unwrap();
        for key in keys {
            entries.remove(&key);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_cache_put_and_get() {
        let cache = MemoryAccessCache::new();

        cache
            .put("affiliation:1:fleet.read", "value".to_string(), 60, &[])
            .await
            .unwrap();

        let value = cache.get("affiliation:1:fleet.read").await.unwrap();
        assert_eq!(value, Some("value".to_string()));
    }

    /// An expired entry reads back as a miss
    #[tokio::test]
    async fn test_memory_cache_expiry() {
        let cache = MemoryAccessCache::new();

        cache
            .put("affiliation:1:fleet.read", "value".to_string(), -1, &[])
            .await
            .unwrap();

        let value = cache.get("affiliation:1:fleet.read").await.unwrap();
        assert_eq!(value, None);
    }

    /// Invalidating a tag drops exactly the entries carrying it
    #[tokio::test]
    async fn test_memory_cache_tag_invalidation() {
        let cache = MemoryAccessCache::new();

        cache
            .put(
                "affiliation:1:fleet.read",
                "first".to_string(),
                60,
                &[user_cache_tag(1), role_cache_tag(7)],
            )
            .await
            .unwrap();
        cache
            .put(
                "affiliation:2:fleet.read",
                "second".to_string(),
                60,
                &[user_cache_tag(2)],
            )
            .await
            .unwrap();

        cache.invalidate_tag(&role_cache_tag(7)).await.unwrap();

        assert_eq!(cache.get("affiliation:1:fleet.read").await.unwrap(), None);
        assert_eq!(
            cache.get("affiliation:2:fleet.read").await.unwrap(),
            Some("second".to_string())
        );
    }

    #[test]
    fn test_cache_key_includes_filter() {
        let filter = CorporationRoleFilter::parse("accountant");

        assert_eq!(
            affiliation_cache_key(1, "fleet.read", None),
            "affiliation:1:fleet.read"
        );
        assert_eq!(
            affiliation_cache_key(1, "fleet.read", Some(&filter)),
            "affiliation:1:fleet.read:Accountant"
        );
    }
}
