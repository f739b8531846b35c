use crate::model::product::ProductField;

/// Pairs a record field with the header label shown above its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMeta {
    pub field: ProductField,
    pub header: &'static str,
}

/// Columns rendered by the product grid, left to right.
pub const PRODUCT_COLUMNS: [ColumnMeta; 5] = [
    ColumnMeta {
        field: ProductField::Country,
        header: "Country",
    },
    ColumnMeta {
        field: ProductField::Code,
        header: "Code",
    },
    ColumnMeta {
        field: ProductField::Name,
        header: "Name",
    },
    ColumnMeta {
        field: ProductField::Quantity,
        header: "Quantity",
    },
    ColumnMeta {
        field: ProductField::Price,
        header: "Price",
    },
];
