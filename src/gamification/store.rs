//! Rewards store.
//!
//! Purchases only record the item id in the session's purchased list. The
//! viewer's coin balance is checked but never debited.

use log::{debug, info};

use crate::errors::BlitzError;
use crate::seed;
use crate::types::{StoreCategory, StoreItem, User};

/// Toast shown after a purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreNotice {
    pub title: String,
    pub description: String,
}

impl StoreNotice {
    /// Toast for a failed purchase.
    pub fn from_error(err: &BlitzError) -> Self {
        match err {
            BlitzError::InsufficientCoins { price, .. } => StoreNotice {
                title: "Moedas insuficientes".to_string(),
                description: format!("Você precisa de {} moedas para comprar este item.", price),
            },
            BlitzError::AlreadyPurchased(_) => StoreNotice {
                title: "Item já comprado".to_string(),
                description: "Você já possui este item.".to_string(),
            },
            other => StoreNotice {
                title: "Erro".to_string(),
                description: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct RewardsStore {
    items: Vec<StoreItem>,
    purchased: Vec<String>,
}

impl Default for RewardsStore {
    fn default() -> Self {
        Self::new(seed::store_catalog())
    }
}

impl RewardsStore {
    pub fn new(items: Vec<StoreItem>) -> Self {
        Self {
            items,
            purchased: Vec::new(),
        }
    }

    pub fn items(&self) -> &[StoreItem] {
        &self.items
    }

    pub fn get(&self, item_id: &str) -> Option<&StoreItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn by_category(&self, category: StoreCategory) -> Vec<&StoreItem> {
        self.items.iter().filter(|i| i.category == category).collect()
    }

    pub fn purchased(&self) -> Vec<&StoreItem> {
        self.items
            .iter()
            .filter(|i| self.is_purchased(&i.id))
            .collect()
    }

    pub fn is_purchased(&self, item_id: &str) -> bool {
        self.purchased.iter().any(|id| id == item_id)
    }

    pub fn can_afford(user: Option<&User>, price: u32) -> bool {
        user.is_some_and(|u| u.coins >= price)
    }

    /// Balance is checked before ownership; with no viewer every purchase is
    /// treated as unaffordable.
    pub fn purchase(
        &mut self,
        user: Option<&User>,
        item_id: &str,
    ) -> Result<StoreNotice, BlitzError> {
        let item = self
            .get(item_id)
            .ok_or_else(|| BlitzError::NotFound(format!("store item {}", item_id)))?;

        if !Self::can_afford(user, item.price) {
            let balance = user.map(|u| u.coins).unwrap_or(0);
            debug!(
                "Purchase of {} refused: price {} balance {}",
                item.id, item.price, balance
            );
            return Err(BlitzError::InsufficientCoins {
                price: item.price,
                balance,
            });
        }
        if self.is_purchased(&item.id) {
            return Err(BlitzError::AlreadyPurchased(item.name.clone()));
        }

        let notice = StoreNotice {
            title: "Compra realizada!".to_string(),
            description: format!("Você comprou {} por {} moedas.", item.name, item.price),
        };
        info!("Store item {} purchased", item.id);
        self.purchased.push(item.id.clone());
        Ok(notice)
    }
}
