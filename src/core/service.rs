use crate::auth::jwt::{Claims, JwtService};
use crate::constants::{INSIGHTS_CACHE_TTL, MAX_INSIGHTS};
use crate::core::analytics::{self, DashboardStats, MonthlyGroup};
use crate::core::errors::SpendlensError;
use crate::core::extract::{ReceiptDraft, receipt_from_draft, unwrap_insights};
use crate::core::models::{Receipt, SpendingInsight, User};
use crate::infrastructure::cache::Cache;
use crate::infrastructure::llm::ModelGateway;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct SpendlensService<S: Storage, M: ModelGateway, C: Cache> {
    storage: S,
    model: M,
    cache: C,
    jwt_service: JwtService,
}

impl<S: Storage, M: ModelGateway, C: Cache> SpendlensService<S, M, C> {
    pub fn new(storage: S, model: M, cache: C, jwt_secret: String) -> Self {
        SpendlensService {
            storage,
            model,
            cache,
            jwt_service: JwtService::new(jwt_secret),
        }
    }

    // AUTH & SESSIONS

    pub fn validate_token(&self, token: &str) -> Result<Claims, SpendlensError> {
        self.jwt_service.validate_token(token)
    }

    pub async fn register_user(
        &self,
        email: String,
        password: &str,
        name: String,
    ) -> Result<User, SpendlensError> {
        if email.trim().is_empty() {
            return Err(SpendlensError::MissingEmail);
        }
        info!(%email, "registering user");

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| SpendlensError::InternalServerError(format!("bcrypt error: {}", e)))?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            password_hash,
            created_at: Utc::now(),
        };
        self.storage.save_user(user.clone()).await?;
        debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, SpendlensError> {
        let user = self
            .storage
            .get_user_by_email(email)
            .await?
            .ok_or(SpendlensError::InvalidCredentials)?;

        let valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| SpendlensError::InternalServerError(format!("bcrypt error: {}", e)))?;
        if !valid {
            warn!(%email, "failed login attempt");
            return Err(SpendlensError::InvalidCredentials);
        }

        self.jwt_service.generate_token(&user.id)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, SpendlensError> {
        self.storage.get_user(user_id).await
    }

    // RECEIPTS

    /// Runs one extraction round trip and persists the result. Any transport
    /// or parse failure aborts the scan; nothing is stored in that case.
    pub async fn scan_receipt(
        &self,
        owner: &User,
        image_payload: &str,
        source_ref: Option<String>,
    ) -> Result<Receipt, SpendlensError> {
        if image_payload.trim().is_empty() {
            return Err(SpendlensError::InvalidImagePayload);
        }
        info!(user_id = %owner.id, "scanning receipt");

        // Drop a data-URL header ("data:image/jpeg;base64,...") if present.
        let clean_base64 = image_payload
            .split_once(',')
            .map(|(_, tail)| tail)
            .unwrap_or(image_payload);

        let raw = self.model.extract_receipt(clean_base64).await?;
        let draft: ReceiptDraft = serde_json::from_value(raw)
            .map_err(|e| SpendlensError::MalformedModelReply(e.to_string()))?;

        let receipt =
            receipt_from_draft(draft, &owner.id, source_ref, Utc::now().date_naive())?;
        self.storage.save_receipt(receipt.clone()).await?;
        self.cache.invalidate_insights(&owner.id).await?;

        info!(
            user_id = %owner.id,
            receipt_id = %receipt.id,
            store = %receipt.store_name,
            total = receipt.total_amount,
            "receipt stored"
        );
        Ok(receipt)
    }

    pub async fn list_receipts(&self, owner: &User) -> Result<Vec<Receipt>, SpendlensError> {
        self.storage.get_receipts_by_owner(&owner.id).await
    }

    /// Removes exactly the targeted receipt. A storage failure propagates and
    /// leaves the stored set unchanged.
    pub async fn delete_receipt(
        &self,
        owner: &User,
        receipt_id: &str,
    ) -> Result<(), SpendlensError> {
        let receipt = self
            .storage
            .get_receipt(receipt_id)
            .await?
            .ok_or_else(|| SpendlensError::ReceiptNotFound(receipt_id.to_string()))?;
        if receipt.owner_id != owner.id {
            warn!(user_id = %owner.id, %receipt_id, "delete attempt on foreign receipt");
            return Err(SpendlensError::NotReceiptOwner(receipt_id.to_string()));
        }

        self.storage.delete_receipt(receipt_id).await?;
        self.cache.invalidate_insights(&owner.id).await?;
        info!(user_id = %owner.id, %receipt_id, "receipt deleted");
        Ok(())
    }

    // DERIVED VIEWS

    pub async fn dashboard(&self, owner: &User) -> Result<DashboardStats, SpendlensError> {
        let receipts = self.storage.get_receipts_by_owner(&owner.id).await?;
        Ok(analytics::dashboard_stats(
            &receipts,
            Utc::now().date_naive(),
        ))
    }

    pub async fn monthly_history(&self, owner: &User) -> Result<Vec<MonthlyGroup>, SpendlensError> {
        let receipts = self.storage.get_receipts_by_owner(&owner.id).await?;
        Ok(analytics::monthly_groups(&receipts))
    }

    // INSIGHTS

    /// Returns up to `MAX_INSIGHTS` advisory entries for the user's spending.
    /// An empty receipt set yields an empty list without a model call; a
    /// model failure degrades to an empty list instead of failing the
    /// request. Non-empty results are cached until the next mutation or TTL.
    pub async fn spending_insights(
        &self,
        owner: &User,
        refresh: bool,
    ) -> Result<Vec<SpendingInsight>, SpendlensError> {
        let receipts = self.storage.get_receipts_by_owner(&owner.id).await?;
        if receipts.is_empty() {
            return Ok(Vec::new());
        }

        if !refresh {
            if let Some(cached) = self.cache.get_insights(&owner.id).await? {
                debug!(user_id = %owner.id, "serving cached insights");
                return Ok(cached);
            }
        }

        let summary = spending_summary(&receipts);
        let raw = match self.model.savings_advice(&summary).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(user_id = %owner.id, error = %e, "advice generation failed");
                return Ok(Vec::new());
            }
        };

        let mut insights = unwrap_insights(&raw);
        if insights.is_empty() {
            warn!(user_id = %owner.id, "advice reply held no usable entries");
        }
        insights.truncate(MAX_INSIGHTS);

        if !insights.is_empty() {
            self.cache
                .save_insights(&owner.id, &insights, INSIGHTS_CACHE_TTL)
                .await?;
        }
        Ok(insights)
    }
}

/// One `date: store - total currency` line per receipt, the textual context
/// the advice model sees.
fn spending_summary(receipts: &[Receipt]) -> String {
    receipts
        .iter()
        .map(|r| {
            format!(
                "{}: {} - {:.2} {}",
                r.date, r.store_name, r.total_amount, r.currency
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
