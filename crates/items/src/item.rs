use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use keepsake_core::{
    Clock, DomainResult, Entity, StorageId, SystemClock, ValidationError, Violations,
};

use crate::category::Category;
use crate::rules::{self, Violation};

/// Item identifier, handed out by storage. Zero until the item is persisted.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub StorageId);

impl ItemId {
    pub const fn new(value: i64) -> Self {
        Self(StorageId::new(value))
    }

    pub const fn get(self) -> i64 {
        self.0.get()
    }

    pub const fn is_assigned(self) -> bool {
        self.0.is_assigned()
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Values for creating an item or replacing all of its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub purchase_price: i64,
    pub purchase_date: String,
}

/// Fields a partial update may touch.
///
/// `None` means "not supplied"; `Some("")` is a supplied empty value and is
/// validated like any other. A missing (or `null`) key deserializes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<i64>,
}

impl ItemPatch {
    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.brand.is_none() && self.purchase_price.is_none()
    }
}

/// Plain snapshot of an item as exchanged with storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub purchase_price: i64,
    /// Always the literal `YYYY-MM-DD` text.
    pub purchase_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A catalogued possession.
///
/// Items only leave [`Item::create`] (and [`Item::restore`]) fully valid. A
/// failed full update keeps the rejected values in place; see [`Item::replace`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    id: ItemId,
    name: String,
    category: String,
    brand: String,
    purchase_price: i64,
    purchase_date: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Item {
    /// Create an item stamped with the system clock.
    pub fn new(
        name: &str,
        category: &str,
        brand: &str,
        purchase_price: i64,
        purchase_date: &str,
    ) -> DomainResult<Self> {
        Self::create(
            &SystemClock,
            ItemInput {
                name: name.to_string(),
                category: category.to_string(),
                brand: brand.to_string(),
                purchase_price,
                purchase_date: purchase_date.to_string(),
            },
        )
    }

    /// Trim the text fields, stamp both timestamps and validate everything.
    ///
    /// Returns every violated rule at once; no item is produced on failure.
    pub fn create<C: Clock + ?Sized>(clock: &C, input: ItemInput) -> DomainResult<Self> {
        let now = clock.now();
        let item = Self {
            id: ItemId::default(),
            name: input.name.trim().to_string(),
            category: input.category.trim().to_string(),
            brand: input.brand.trim().to_string(),
            purchase_price: input.purchase_price,
            purchase_date: input.purchase_date.trim().to_string(),
            created_at: now,
            updated_at: now,
        };

        if let Err(err) = item.validate() {
            debug!(violations = %err, "item rejected");
            return Err(err);
        }

        debug!(name = %item.name, category = %item.category, "item created");
        Ok(item)
    }

    /// Rehydrate a stored item, keeping its id and timestamps.
    pub fn restore(record: ItemRecord) -> DomainResult<Self> {
        let item = Self {
            id: record.id,
            name: record.name,
            category: record.category,
            brand: record.brand,
            purchase_price: record.purchase_price,
            purchase_date: record.purchase_date,
            created_at: record.created_at,
            updated_at: record.updated_at,
        };

        let mut violations = Violations::new();
        if let Err(err) = item.validate() {
            violations.extend(err.into_messages());
        }
        violations.check(
            item.updated_at < item.created_at,
            Violation::UpdatedBeforeCreated,
        );
        violations.into_result()?;

        Ok(item)
    }

    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            brand: self.brand.clone(),
            purchase_price: self.purchase_price,
            purchase_date: self.purchase_date.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Check all five field rules, in fixed order, without stopping early.
    pub fn validate(&self) -> DomainResult<()> {
        let outcomes = [
            rules::validate_name(&self.name),
            rules::validate_category(&self.category),
            rules::validate_brand(&self.brand),
            rules::validate_purchase_price(self.purchase_price),
            rules::validate_purchase_date(&self.purchase_date),
        ];

        let mut violations = Violations::new();
        for violation in outcomes.into_iter().filter_map(Result::err) {
            violations.push(violation);
        }
        violations.into_result()
    }

    /// Full update stamped with the system clock.
    pub fn update(
        &mut self,
        name: &str,
        category: &str,
        brand: &str,
        purchase_price: i64,
        purchase_date: &str,
    ) -> DomainResult<()> {
        self.replace(
            &SystemClock,
            ItemInput {
                name: name.to_string(),
                category: category.to_string(),
                brand: brand.to_string(),
                purchase_price,
                purchase_date: purchase_date.to_string(),
            },
        )
    }

    /// Replace all five mutable fields, then validate the new state.
    ///
    /// Assignment happens before validation and is not rolled back: after an
    /// `Err` the item holds the rejected values.
    pub fn replace<C: Clock + ?Sized>(&mut self, clock: &C, input: ItemInput) -> DomainResult<()> {
        self.name = input.name.trim().to_string();
        self.category = input.category.trim().to_string();
        self.brand = input.brand.trim().to_string();
        self.purchase_price = input.purchase_price;
        self.purchase_date = input.purchase_date.trim().to_string();
        self.touch(clock.now());

        let result = self.validate();
        match &result {
            Ok(()) => debug!(item_id = %self.id, "item replaced"),
            Err(err) => debug!(item_id = %self.id, violations = %err, "item replaced with invalid values"),
        }
        result
    }

    /// Partial update stamped with the system clock.
    pub fn update_partial(
        &mut self,
        name: Option<&str>,
        brand: Option<&str>,
        purchase_price: Option<i64>,
    ) -> DomainResult<()> {
        self.patch_fields(&SystemClock, name, brand, purchase_price)
    }

    /// Apply the supplied fields of `patch`; absent ones are left alone.
    pub fn apply_patch<C: Clock + ?Sized>(&mut self, clock: &C, patch: &ItemPatch) -> DomainResult<()> {
        self.patch_fields(
            clock,
            patch.name.as_deref(),
            patch.brand.as_deref(),
            patch.purchase_price,
        )
    }

    // Each supplied field is validated and committed on its own: a bad name does
    // not hold back a good brand. `category`, `purchase_date`, `id` and
    // `created_at` are out of reach here.
    fn patch_fields<C: Clock + ?Sized>(
        &mut self,
        clock: &C,
        name: Option<&str>,
        brand: Option<&str>,
        purchase_price: Option<i64>,
    ) -> DomainResult<()> {
        let mut violations = Violations::new();

        if let Some(name) = name {
            let name = name.trim();
            match rules::validate_name(name) {
                Ok(()) => self.name = name.to_string(),
                Err(violation) => violations.push(violation),
            }
        }

        if let Some(brand) = brand {
            let brand = brand.trim();
            match rules::validate_brand(brand) {
                Ok(()) => self.brand = brand.to_string(),
                Err(violation) => violations.push(violation),
            }
        }

        if let Some(price) = purchase_price {
            match rules::validate_purchase_price(price) {
                Ok(()) => self.purchase_price = price,
                Err(violation) => violations.push(violation),
            }
        }

        if name.is_some() || brand.is_some() || purchase_price.is_some() {
            self.touch(clock.now());
        }

        if !violations.is_empty() {
            debug!(item_id = %self.id, rejected = violations.len(), "partial update rejected fields");
        }
        violations.into_result()
    }

    /// Record the storage id. Refused once an id is already set.
    pub fn assign_id(&mut self, id: ItemId) -> bool {
        if self.id.is_assigned() || !id.is_assigned() {
            debug!(current = %self.id, requested = %id, "item id assignment refused");
            return false;
        }
        self.id = id;
        true
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The category as a typed value; `None` only after a failed full update.
    pub fn category_kind(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn purchase_price(&self) -> i64 {
        self.purchase_price
    }

    pub fn purchase_date(&self) -> &str {
        &self.purchase_date
    }

    pub fn purchase_date_value(&self) -> Option<NaiveDate> {
        rules::parse_purchase_date(&self.purchase_date)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = ValidationError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Self::restore(record)
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        item.to_record()
    }
}
