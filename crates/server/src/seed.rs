//! Demo seed data.
//!
//! The catalog ships with the demo grocery inventory until a real ingest
//! source is wired up; the sales figures are synthesized per process start
//! with a drifting random walk, which is enough for the dashboard charts
//! the client renders.

use rand::Rng;

use shoplytix_core::{Barcode, Category, CategoryId, Money, Product, ProductCode, Unit, UnitId};

/// Month labels for the dashboard series, in order.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Per-category sales total for the bar chart.
#[derive(Debug, Clone)]
pub struct CategorySales {
    pub label: String,
    pub sales: f64,
}

/// Synthesized sales figures backing the dashboard.
#[derive(Debug, Clone)]
pub struct SalesFigures {
    pub daily_sales: f64,
    pub previous_daily_sales: f64,
    pub weekly_sales: f64,
    pub previous_weekly_sales: f64,
    pub month_sales: f64,
    pub previous_month_sales: f64,
    /// Twelve months each, aligned with [`MONTH_LABELS`].
    pub sales: Vec<f64>,
    pub expenses: Vec<f64>,
    pub losses: Vec<f64>,
    pub net_profits: Vec<f64>,
    pub category_sales: Vec<CategorySales>,
}

fn product(
    code: &str,
    barcode: &str,
    name: &str,
    description: &str,
    cost_centavos: i64,
    selling_centavos: i64,
    unit: &str,
    stock: i64,
    category: &str,
    image_tag: &str,
) -> Product {
    Product {
        prod_code: ProductCode::new(code),
        barcode: Barcode::new(barcode),
        name: name.to_owned(),
        description: description.to_owned(),
        cost_price: Money::from_centavos(cost_centavos),
        selling_price: Money::from_centavos(selling_centavos),
        unit: unit.to_owned(),
        stock,
        category_id: CategoryId::new(category),
        image_url: format!("https://placehold.co/150x150/EFEFEF/grey?text={image_tag}"),
    }
}

/// The demo grocery catalog.
#[must_use]
pub fn demo_products() -> Vec<Product> {
    vec![
        product(
            "bev001",
            "8881234567",
            "Cola 1.5L Bottle",
            "Carbonated soft drink",
            5_500,
            6_500,
            "pcs",
            45,
            "cat1",
            "Cola",
        ),
        product(
            "can001",
            "8882345678",
            "Canned Tuna in Oil",
            "Tuna flakes in vegetable oil",
            3_000,
            3_850,
            "pcs",
            120,
            "cat2",
            "Tuna",
        ),
        product(
            "frz001",
            "8883456789",
            "Chicken Nuggets 1kg",
            "Frozen breaded chicken",
            18_000,
            22_000,
            "kg",
            3,
            "cat3",
            "Nuggets",
        ),
        product(
            "met001",
            "8884567890",
            "Pork Chop (per kg)",
            "Fresh-cut pork chop",
            32_000,
            38_000,
            "kg",
            15,
            "cat4",
            "Pork",
        ),
        product(
            "bev002",
            "8885678901",
            "Orange Juice 1L",
            "Chilled orange juice",
            7_000,
            8_500,
            "pcs",
            0,
            "cat1",
            "Juice",
        ),
        product(
            "can002",
            "8886789012",
            "Corned Beef 150g",
            "Canned corned beef",
            4_500,
            5_200,
            "pcs",
            80,
            "cat2",
            "Beef",
        ),
        product(
            "met002",
            "8887890123",
            "Ground Beef (per kg)",
            "Fresh ground beef",
            35_000,
            41_000,
            "kg",
            8,
            "cat4",
            "Meat",
        ),
        product(
            "frz002",
            "8888901234",
            "Jumbo Hotdogs 500g",
            "Frozen jumbo hotdogs",
            9_000,
            11_000,
            "pack",
            25,
            "cat3",
            "Hotdog",
        ),
    ]
}

/// The demo categories, matching the catalog above.
#[must_use]
pub fn demo_categories() -> Vec<Category> {
    [
        ("cat1", "Beverages"),
        ("cat2", "Canned Goods"),
        ("cat3", "Frozen Foods"),
        ("cat4", "Fresh Meat"),
    ]
    .into_iter()
    .map(|(id, label)| Category {
        id: CategoryId::new(id),
        label: label.to_owned(),
    })
    .collect()
}

/// The demo units of measure.
#[must_use]
pub fn demo_units() -> Vec<Unit> {
    [("unit1", "pcs"), ("unit2", "box"), ("unit3", "kg")]
        .into_iter()
        .map(|(id, label)| Unit {
            id: UnitId::new(id),
            label: label.to_owned(),
        })
        .collect()
}

/// Twelve months of values drifting from `base` with a slight upward bias.
fn monthly_walk(rng: &mut impl Rng, base: f64, growth: f64) -> Vec<f64> {
    let mut value = base;
    (0..12)
        .map(|_| {
            value += (rng.random::<f64>() - 0.45) * growth;
            value.max(0.0).round()
        })
        .collect()
}

/// Synthesize the dashboard sales figures.
#[must_use]
pub fn demo_sales_figures(rng: &mut impl Rng) -> SalesFigures {
    let sales = monthly_walk(rng, 25_000.0, 5_000.0);
    let expenses = monthly_walk(rng, 15_000.0, 4_000.0);
    let losses = monthly_walk(rng, 1_000.0, 1_000.0);
    let net_profits = sales
        .iter()
        .zip(&expenses)
        .zip(&losses)
        .map(|((s, e), l)| s - e - l)
        .collect();

    let category_sales = demo_categories()
        .into_iter()
        .map(|category| CategorySales {
            label: category.label,
            sales: rng.random_range::<f64, _>(5_000.0..20_000.0).round(),
        })
        .collect();

    SalesFigures {
        daily_sales: rng.random_range::<f64, _>(1_000.0..5_000.0).round(),
        previous_daily_sales: rng.random_range::<f64, _>(1_000.0..5_000.0).round(),
        weekly_sales: rng.random_range::<f64, _>(5_000.0..20_000.0).round(),
        previous_weekly_sales: rng.random_range::<f64, _>(5_000.0..20_000.0).round(),
        month_sales: rng.random_range::<f64, _>(20_000.0..80_000.0).round(),
        previous_month_sales: rng.random_range::<f64, _>(20_000.0..80_000.0).round(),
        sales,
        expenses,
        losses,
        net_profits,
        category_sales,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplytix_core::StockStatus;

    #[test]
    fn test_demo_catalog_is_consistent() {
        let products = demo_products();
        let categories = demo_categories();

        assert_eq!(products.len(), 8);
        for product in &products {
            assert!(product.stock >= 0);
            assert!(product.cost_price < product.selling_price);
            assert!(
                categories.iter().any(|c| c.id == product.category_id),
                "unknown category for {}",
                product.prod_code
            );
        }

        // The demo data deliberately covers every stock classification
        let statuses: Vec<StockStatus> = products.iter().map(Product::stock_status).collect();
        assert!(statuses.contains(&StockStatus::OutOfStock));
        assert!(statuses.contains(&StockStatus::LowStock));
        assert!(statuses.contains(&StockStatus::InStock));
    }

    #[test]
    fn test_sales_figures_shape() {
        let mut rng = rand::rng();
        let figures = demo_sales_figures(&mut rng);

        assert_eq!(figures.sales.len(), 12);
        assert_eq!(figures.expenses.len(), 12);
        assert_eq!(figures.losses.len(), 12);
        assert_eq!(figures.net_profits.len(), 12);
        assert_eq!(figures.category_sales.len(), 4);
        assert!(figures.sales.iter().all(|v| *v >= 0.0));
        assert!((1_000.0..=5_000.0).contains(&figures.daily_sales));
    }
}
