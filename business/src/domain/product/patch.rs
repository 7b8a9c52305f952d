use super::model::Product;

/// Sparse update of a product. `None` means "not supplied"; the id is not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub qtd: Option<i32>,
    pub category_id: Option<i64>,
    pub supplier_id: Option<i64>,
}

impl ProductPatch {
    pub fn touches_references(&self) -> bool {
        self.category_id.is_some() || self.supplier_id.is_some()
    }

    /// Reference pair the product will hold once this patch is applied to `existing`.
    pub fn merged_references(&self, existing: &Product) -> (i64, i64) {
        (
            self.category_id.unwrap_or(existing.category_id),
            self.supplier_id.unwrap_or(existing.supplier_id),
        )
    }
}

/// Applies `patch` on top of `existing`. Supplied fields win, everything else is kept.
pub fn merge(existing: &Product, patch: &ProductPatch) -> Product {
    let (category_id, supplier_id) = patch.merged_references(existing);

    Product {
        id: existing.id,
        name: patch.name.clone().unwrap_or_else(|| existing.name.clone()),
        price: patch.price.unwrap_or(existing.price),
        qtd: patch.qtd.unwrap_or(existing.qtd),
        category_id,
        supplier_id,
    }
}
