//! Literature inventory for door-to-door sellers: titles in stock, stock
//! adjustments and the summary cards of the inventory page.

use chrono::Utc;
use log::{debug, info};

use crate::errors::BlitzError;
use crate::logutil::escape_log;
use crate::seed;
use crate::types::{InventoryCategory, InventoryItem};

/// Items below this many units carry the "Estoque Baixo" badge.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// "Adicionar livro" form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInventoryItem {
    pub title: String,
    pub category: InventoryCategory,
    pub stock: u32,
    pub price: f64,
    pub cost: f64,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
}

impl Default for NewInventoryItem {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: InventoryCategory::Religious,
            stock: 0,
            price: 0.0,
            cost: 0.0,
            isbn: None,
            publisher: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InventoryBook {
    items: Vec<InventoryItem>,
}

impl InventoryBook {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn seeded() -> Self {
        Self::new(seed::starter_inventory())
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn add_item(&mut self, form: NewInventoryItem) -> Result<&InventoryItem, BlitzError> {
        if form.title.is_empty() {
            return Err(BlitzError::Validation("title is required".to_string()));
        }
        if form.price <= 0.0 || !form.price.is_finite() {
            return Err(BlitzError::Validation("price must be positive".to_string()));
        }

        let now = Utc::now();
        let item = InventoryItem {
            id: uuid::Uuid::new_v4().to_string(),
            title: form.title,
            category: form.category,
            stock: form.stock,
            price: form.price,
            cost: form.cost,
            isbn: form.isbn,
            publisher: form.publisher,
            added_at: now,
            updated_at: now,
        };
        info!("Inventory item added: {}", escape_log(&item.title));
        let index = self.items.len();
        self.items.push(item);
        Ok(&self.items[index])
    }

    /// Apply `delta` to an item's stock, never going below zero.
    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> Result<u32, BlitzError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| BlitzError::NotFound(format!("inventory item {}", id)))?;
        let next = (i64::from(item.stock) + delta).clamp(0, i64::from(u32::MAX));
        item.stock = next as u32;
        item.updated_at = Utc::now();
        debug!("Stock of {} is now {}", item.id, item.stock);
        Ok(item.stock)
    }

    /// Stock valued at cost.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|i| f64::from(i.stock) * i.cost).sum()
    }

    pub fn total_units(&self) -> u32 {
        self.items.iter().map(|i| i.stock).sum()
    }

    pub fn low_stock(&self) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|i| i.stock < LOW_STOCK_THRESHOLD)
            .collect()
    }

    pub fn low_stock_count(&self) -> usize {
        self.low_stock().len()
    }

    /// Stock valued at sale price.
    pub fn potential_revenue(&self) -> f64 {
        self.items.iter().map(|i| f64::from(i.stock) * i.price).sum()
    }

    pub fn potential_margin(&self) -> f64 {
        self.potential_revenue() - self.total_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, price: f64) -> NewInventoryItem {
        NewInventoryItem {
            title: title.to_string(),
            stock: 3,
            price,
            cost: 2.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_seeded_summary() {
        let book = InventoryBook::seeded();
        assert_eq!(book.total_units(), 40);
        assert_eq!(book.total_value(), 25.0 * 8.0 + 15.0 * 12.0);
        assert_eq!(book.potential_revenue(), 25.0 * 15.0 + 15.0 * 20.0);
        assert_eq!(book.potential_margin(), 675.0 - 380.0);
        assert_eq!(book.low_stock_count(), 0);
    }

    #[test]
    fn test_add_item_validation() {
        let mut book = InventoryBook::default();
        assert!(matches!(
            book.add_item(form("", 10.0)),
            Err(BlitzError::Validation(_))
        ));
        assert!(matches!(
            book.add_item(form("Livro", 0.0)),
            Err(BlitzError::Validation(_))
        ));
        assert!(book.items().is_empty());

        let added = book.add_item(form("Livro", 9.9)).unwrap();
        assert_eq!(added.stock, 3);
        assert_eq!(book.low_stock_count(), 1);
    }

    #[test]
    fn test_adjust_clamps_at_zero() {
        let mut book = InventoryBook::seeded();
        let before = book.get("2").unwrap().updated_at;
        assert_eq!(book.adjust_stock("2", -100).unwrap(), 0);
        assert!(book.get("2").unwrap().updated_at >= before);
        assert_eq!(book.adjust_stock("2", 4).unwrap(), 4);
        assert_eq!(book.low_stock_count(), 1);
        assert!(book.adjust_stock("nope", 1).is_err());
    }
}
