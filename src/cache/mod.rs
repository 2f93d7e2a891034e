//! Admission-authority cache (C2): Redis-backed email lock and per-category
//! quantity counter. The counter is allowed to go transiently negative —
//! callers compensate with a matching increment on conflict.

pub mod keys;

use redis::AsyncCommands;
use redis::aio::ConnectionManager;

#[derive(Clone)]
pub struct Cache {
    conn: ConnectionManager,
}

impl Cache {
    pub async fn connect(url: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(url)?;
        let conn = client.get_connection_manager().await?;
        Ok(Self { conn })
    }

    /// Atomically claims the email lock for `ttl_secs`. Returns `true` if
    /// this caller won the lock (first admission attempt for this email).
    pub async fn try_lock_email(
        &self,
        email: &str,
        ttl_secs: u64,
    ) -> Result<bool, redis::RedisError> {
        let mut conn = self.conn.clone();
        let key = keys::email_lock(email);
        let set: Option<String> = redis::cmd("SET")
            .arg(&key)
            .arg(1)
            .arg("NX")
            .arg("EX")
            .arg(ttl_secs)
            .query_async(&mut conn)
            .await?;
        Ok(set.is_some())
    }

    pub async fn release_email_lock(&self, email: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(keys::email_lock(email)).await?;
        Ok(())
    }

    /// Decrements the category quantity counter by one, returning the new
    /// value (may go negative — caller must compensate and reject).
    pub async fn decrement_quantity(&self, category_id: i64) -> Result<i64, redis::RedisError> {
        let mut conn = self.conn.clone();
        conn.decr(keys::category_quantity(category_id), 1).await
    }

    pub async fn increment_quantity(&self, category_id: i64) -> Result<i64, redis::RedisError> {
        let mut conn = self.conn.clone();
        conn.incr(keys::category_quantity(category_id), 1).await
    }

    pub async fn increment_quantity_by(
        &self,
        category_id: i64,
        delta: i64,
    ) -> Result<i64, redis::RedisError> {
        let mut conn = self.conn.clone();
        conn.incr(keys::category_quantity(category_id), delta)
            .await
    }

    pub async fn set_quantity(&self, category_id: i64, value: i64) -> Result<(), redis::RedisError> {
        let mut conn = self.conn.clone();
        conn.set(keys::category_quantity(category_id), value).await
    }

    /// Reads quantities for many categories in one round trip; missing
    /// keys come back as `None` (category never primed in cache).
    pub async fn get_quantities(
        &self,
        category_ids: &[i64],
    ) -> Result<Vec<Option<i64>>, redis::RedisError> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.conn.clone();
        let ks: Vec<String> = category_ids.iter().map(|id| keys::category_quantity(*id)).collect();
        conn.mget(ks).await
    }
}
