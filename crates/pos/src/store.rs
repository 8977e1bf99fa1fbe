//! The sales cart and its persisted store.
//!
//! [`SalesCart`] is the pure data structure: an ordered list of lines with
//! merge-on-add, idempotent removal, and derived totals. [`CartStore`] wraps
//! it with the two side effects every mutation carries - persisting a
//! snapshot and notifying the render target.

use medisync_core::{MedicineId, Price};
use tracing::{debug, warn};

use crate::error::{CartError, Result};
use crate::models::{LineItem, LineItemRecord};
use crate::persist::KeyValueStore;
use crate::view::{CartItemView, CartRenderer, CartView};

/// Storage key for the persisted cart snapshot.
pub const CART_KEY: &str = "sales_cart";

/// Ordered collection of cart lines.
///
/// Insertion order is display order. No two lines share an id - adding an
/// id that is already present grows its quantity instead.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SalesCart {
    items: Vec<LineItem>,
}

impl SalesCart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from persisted records.
    ///
    /// Lines without a positive quantity are dropped - a live cart never
    /// holds them, so a snapshot claiming one is stale.
    #[must_use]
    pub fn from_records(records: Vec<LineItemRecord>) -> Self {
        Self {
            items: records
                .into_iter()
                .filter(|record| record.quantity > 0)
                .map(LineItem::from)
                .collect(),
        }
    }

    /// Snapshot the cart as wire records, in order.
    #[must_use]
    pub fn records(&self) -> Vec<LineItemRecord> {
        self.items.iter().map(LineItemRecord::from).collect()
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: &MedicineId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|line| &line.id == id)
    }

    /// Add one unit of a medicine, merging with an existing line.
    ///
    /// `stock_ceiling` is the stock available right now, supplied fresh by
    /// the caller; it is only consulted here, never stored.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StockExceeded`] when the line already holds
    /// `stock_ceiling` units. The cart is left unchanged.
    pub fn add_item(
        &mut self,
        id: MedicineId,
        name: &str,
        unit_price: Price,
        stock_ceiling: u32,
    ) -> Result<()> {
        if let Some(line) = self.find_mut(&id) {
            if line.quantity >= stock_ceiling {
                return Err(CartError::StockExceeded {
                    id,
                    available: stock_ceiling,
                });
            }
            line.quantity += 1;
        } else {
            self.items
                .push(LineItem::single(id, name.to_owned(), unit_price));
        }
        Ok(())
    }

    /// Remove the line matching `id`, if present. Absent ids are a no-op.
    pub fn remove_item(&mut self, id: &MedicineId) {
        self.items.retain(|line| &line.id != id);
    }

    /// Overwrite the quantity of the line matching `id`.
    ///
    /// A zero quantity or an unknown id leaves the cart untouched. Returns
    /// whether anything changed. The stock ceiling is deliberately not
    /// consulted here; only adds check it.
    pub fn set_quantity(&mut self, id: &MedicineId, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        match self.find_mut(id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of line totals; zero for an empty cart.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities; zero for an empty cart.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Project the cart into display data. Pure; no side effects.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView {
            items: self
                .items
                .iter()
                .map(|line| CartItemView {
                    name: line.name.clone(),
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                    line_total: line.line_total(),
                })
                .collect(),
            total_price: self.total_price(),
            total_quantity: self.total_quantity(),
        }
    }
}

/// Cart store: keeps the [`SalesCart`], its persisted snapshot, and a
/// render target in sync through every mutation.
pub struct CartStore<S: KeyValueStore> {
    cart: SalesCart,
    storage: S,
    renderer: Box<dyn CartRenderer>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the store, loading any persisted snapshot, and render once.
    ///
    /// A missing, unreadable, or unparseable snapshot yields an empty cart;
    /// corruption is logged, never propagated.
    pub fn open(storage: S, renderer: Box<dyn CartRenderer>) -> Self {
        let cart = match storage.get(CART_KEY) {
            Ok(Some(text)) => match serde_json::from_str::<Vec<LineItemRecord>>(&text) {
                Ok(records) => SalesCart::from_records(records),
                Err(e) => {
                    warn!("discarding unparseable cart snapshot: {e}");
                    SalesCart::new()
                }
            },
            Ok(None) => SalesCart::new(),
            Err(e) => {
                warn!("failed to read cart snapshot: {e}");
                SalesCart::new()
            }
        };

        let mut store = Self {
            cart,
            storage,
            renderer,
        };
        let view = store.cart.view();
        store.renderer.render(&view);
        store
    }

    /// Add one unit of a medicine, then persist and re-render.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StockExceeded`] when the line is already at the
    /// ceiling (nothing persisted, nothing rendered), or
    /// [`CartError::Storage`] if the snapshot write fails.
    pub fn add_item(
        &mut self,
        id: MedicineId,
        name: &str,
        unit_price: Price,
        stock_ceiling: u32,
    ) -> Result<()> {
        debug!(id = %id, "adding item to cart");
        self.cart.add_item(id, name, unit_price, stock_ceiling)?;
        self.commit()
    }

    /// Remove the line matching `id`, then persist and re-render.
    ///
    /// Removal is idempotent; the snapshot is rewritten even when nothing
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the snapshot write fails.
    pub fn remove_item(&mut self, id: &MedicineId) -> Result<()> {
        debug!(id = %id, "removing item from cart");
        self.cart.remove_item(id);
        self.commit()
    }

    /// Overwrite a line's quantity, then persist and re-render.
    ///
    /// A zero quantity or an unknown id is a silent no-op: nothing is
    /// persisted and nothing is rendered.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the snapshot write fails.
    pub fn set_quantity(&mut self, id: &MedicineId, quantity: u32) -> Result<()> {
        if self.cart.set_quantity(id, quantity) {
            debug!(id = %id, quantity, "updated cart quantity");
            self.commit()
        } else {
            Ok(())
        }
    }

    /// Empty the cart unconditionally, then persist and re-render.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the snapshot write fails.
    pub fn clear(&mut self) -> Result<()> {
        debug!("clearing cart");
        self.cart.clear();
        self.commit()
    }

    /// Sum of line totals; zero for an empty cart.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.total_price()
    }

    /// Sum of quantities; zero for an empty cart.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.cart.total_quantity()
    }

    /// Project the cart into display data. Pure; no side effects.
    #[must_use]
    pub fn render(&self) -> CartView {
        self.cart.view()
    }

    /// The underlying cart.
    #[must_use]
    pub fn cart(&self) -> &SalesCart {
        &self.cart
    }

    /// Persist the snapshot, then notify the render target.
    fn commit(&mut self) -> Result<()> {
        let text = serde_json::to_string(&self.cart.records())
            .map_err(|e| CartError::Storage(Box::new(e)))?;
        self.storage
            .put(CART_KEY, &text)
            .map_err(|e| CartError::Storage(Box::new(e)))?;

        let view = self.cart.view();
        self.renderer.render(&view);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rust_decimal::Decimal;

    use crate::persist::MemoryStore;
    use crate::view::NullRenderer;

    use super::*;

    fn price(cents: i64) -> Price {
        Price::new(Decimal::new(cents, 2))
    }

    /// Renderer capturing every view it receives, shared with the test.
    #[derive(Clone, Default)]
    struct RecordingRenderer(Rc<RefCell<Vec<CartView>>>);

    impl CartRenderer for RecordingRenderer {
        fn render(&mut self, view: &CartView) {
            self.0.borrow_mut().push(view.clone());
        }
    }

    fn open_empty() -> CartStore<MemoryStore> {
        CartStore::open(MemoryStore::new(), Box::new(NullRenderer))
    }

    #[test]
    fn test_add_inserts_single_unit() {
        let mut store = open_empty();
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 10)
            .unwrap();

        let items = store.cart().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].line_total(), price(250));
    }

    #[test]
    fn test_add_merges_by_id() {
        let mut store = open_empty();
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 10)
            .unwrap();
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 10)
            .unwrap();

        let items = store.cart().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].line_total(), price(500));
    }

    #[test]
    fn test_add_beyond_ceiling_leaves_cart_unchanged() {
        let mut store = open_empty();
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 1)
            .unwrap();

        let before = store.cart().clone();
        let err = store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 1)
            .unwrap_err();

        assert!(matches!(
            err,
            CartError::StockExceeded {
                id: MedicineId::Number(7),
                available: 1,
            }
        ));
        assert_eq!(store.cart(), &before);
    }

    #[test]
    fn test_add_rejection_persists_and_renders_nothing() {
        let views = RecordingRenderer::default();
        let storage = MemoryStore::new();
        let mut store = CartStore::open(storage, Box::new(views.clone()));
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 1)
            .unwrap();

        let renders_before = views.0.borrow().len();
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 1)
            .unwrap_err();
        assert_eq!(views.0.borrow().len(), renders_before);
    }

    #[test]
    fn test_insert_path_does_not_consult_ceiling() {
        // The ceiling only guards growth of an existing line; a fresh
        // insert always lands with one unit.
        let mut store = open_empty();
        store
            .add_item(MedicineId::Number(9), "Amoxicillin", price(780), 0)
            .unwrap();
        assert_eq!(store.total_quantity(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = open_empty();
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 10)
            .unwrap();

        store.remove_item(&MedicineId::Number(7)).unwrap();
        assert!(store.cart().is_empty());

        store.remove_item(&MedicineId::Number(7)).unwrap();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_set_quantity_overwrites_and_recomputes_total() {
        let mut store = open_empty();
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 10)
            .unwrap();

        store.set_quantity(&MedicineId::Number(7), 4).unwrap();
        assert_eq!(store.total_quantity(), 4);
        assert_eq!(store.total_price(), price(1000));
    }

    #[test]
    fn test_set_quantity_zero_is_a_noop() {
        let views = RecordingRenderer::default();
        let mut store = CartStore::open(MemoryStore::new(), Box::new(views.clone()));
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 10)
            .unwrap();
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 10)
            .unwrap();

        let renders_before = views.0.borrow().len();
        store.set_quantity(&MedicineId::Number(7), 0).unwrap();

        // Cart unchanged at quantity 2, and nothing re-rendered
        assert_eq!(store.total_quantity(), 2);
        assert_eq!(views.0.borrow().len(), renders_before);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_a_noop() {
        let mut store = open_empty();
        store.set_quantity(&MedicineId::Number(404), 3).unwrap();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_set_quantity_ignores_stock_ceiling() {
        // Only adds check stock; quantity edits trust the caller.
        let mut store = open_empty();
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 3)
            .unwrap();
        store.set_quantity(&MedicineId::Number(7), 50).unwrap();
        assert_eq!(store.total_quantity(), 50);
    }

    #[test]
    fn test_clear_zeroes_everything() {
        let mut store = open_empty();
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 10)
            .unwrap();
        store
            .add_item(MedicineId::from("BN-4413"), "Ibuprofen", price(310), 5)
            .unwrap();

        store.clear().unwrap();
        assert_eq!(store.total_price(), Price::ZERO);
        assert_eq!(store.total_quantity(), 0);
        assert!(store.render().items.is_empty());
    }

    #[test]
    fn test_sales_scenario() {
        let mut store = open_empty();
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 10)
            .unwrap();
        assert_eq!(store.total_price(), price(250));

        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 10)
            .unwrap();
        assert_eq!(store.cart().items()[0].quantity, 2);
        assert_eq!(store.cart().items()[0].line_total(), price(500));

        store.set_quantity(&MedicineId::Number(7), 0).unwrap();
        assert_eq!(store.cart().items()[0].quantity, 2);

        store.remove_item(&MedicineId::Number(7)).unwrap();
        assert!(store.cart().is_empty());
        assert_eq!(store.total_price(), Price::ZERO);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = open_empty();
        store
            .add_item(MedicineId::Number(2), "Paracetamol", price(120), 40)
            .unwrap();
        store
            .add_item(MedicineId::Number(1), "Aspirin", price(250), 10)
            .unwrap();
        store
            .add_item(MedicineId::Number(2), "Paracetamol", price(120), 40)
            .unwrap();

        let names: Vec<&str> = store
            .cart()
            .items()
            .iter()
            .map(|line| line.name.as_str())
            .collect();
        assert_eq!(names, ["Paracetamol", "Aspirin"]);
    }

    #[test]
    fn test_every_mutation_persists() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(storage, Box::new(NullRenderer));
        store
            .add_item(MedicineId::Number(7), "Aspirin", price(250), 10)
            .unwrap();

        // Reload from the same backing map via a snapshot round-trip
        let records: Vec<LineItemRecord> = serde_json::from_str(
            &store.storage.get(CART_KEY).unwrap().unwrap(),
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quantity, 1);

        store.clear().unwrap();
        let records: Vec<LineItemRecord> = serde_json::from_str(
            &store.storage.get(CART_KEY).unwrap().unwrap(),
        )
        .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_open_renders_loaded_snapshot() {
        let storage = MemoryStore::new();
        storage
            .put(
                CART_KEY,
                r#"[{"id":7,"name":"Aspirin","unitPrice":2.5,"quantity":2,"lineTotal":5.0}]"#,
            )
            .unwrap();

        let views = RecordingRenderer::default();
        let store = CartStore::open(storage, Box::new(views.clone()));

        assert_eq!(store.total_quantity(), 2);
        let rendered = views.0.borrow();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].total_quantity, 2);
    }

    #[test]
    fn test_open_recovers_from_garbage_snapshot() {
        let storage = MemoryStore::new();
        storage.put(CART_KEY, "not json at all {{{").unwrap();

        let store = CartStore::open(storage, Box::new(NullRenderer));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_load_drops_zero_quantity_lines() {
        let storage = MemoryStore::new();
        storage
            .put(
                CART_KEY,
                r#"[{"id":1,"name":"A","unitPrice":1.0,"quantity":0},
                    {"id":2,"name":"B","unitPrice":1.0,"quantity":3}]"#,
            )
            .unwrap();

        let store = CartStore::open(storage, Box::new(NullRenderer));
        assert_eq!(store.cart().items().len(), 1);
        assert_eq!(store.total_quantity(), 3);
    }
}
