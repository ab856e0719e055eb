use crate::models::{FoodCategory, FoodItem, Per100g};

/// Protein rotation for cutting-phase meals (lean sources).
pub const CUT_PROTEIN_ROTATION: &[&str] = &[
    "Chicken Breast (grilled)",
    "Egg Whites (cooked)",
    "White Fish (tilapia)",
    "Lean Beef (95% lean)",
    "Greek Yogurt (0% fat)",
    "Cottage Cheese (1% fat)",
];

/// Protein rotation for refuelling-phase meals (fattier sources allowed).
pub const REFUEL_PROTEIN_ROTATION: &[&str] = &[
    "Chicken Breast (grilled)",
    "Salmon (baked)",
    "Lean Beef (95% lean)",
    "Whole Eggs (scrambled)",
];

pub const CARB_ROTATION: &[&str] = &[
    "White Rice (cooked)",
    "Sweet Potato (baked)",
    "Oats (dry weight)",
    "Potato (boiled)",
    "Quinoa (cooked)",
    "Banana",
];

pub const FAT_ROTATION: &[&str] = &[
    "Avocado",
    "Almonds",
    "Peanut Butter (natural)",
    "Olive Oil (1 tbsp = 14g)",
];

pub const VEG_ROTATION: &[&str] = &[
    "Broccoli (steamed)",
    "Asparagus (cooked)",
    "Green Beans (cooked)",
    "Bell Peppers (raw)",
    "Spinach (raw)",
    "Mixed Berries",
];

/// Fat sources that are pure oil: portions cap at 20 g.
pub const PURE_OIL_SOURCES: &[&str] = &["Olive Oil (1 tbsp = 14g)"];

/// Nut and nut-butter fat sources: portions cap at 40 g.
pub const NUT_SOURCES: &[&str] = &["Almonds", "Peanut Butter (natural)"];

fn food(name: &str, category: FoodCategory, cal: f64, p: f64, c: f64, f: f64, fib: f64) -> FoodItem {
    FoodItem::new(
        name,
        category,
        Per100g {
            calories: cal,
            protein: p,
            carbs: c,
            fat: f,
            fiber: fib,
        },
    )
}

/// The built-in food table. Per-100g values for cooked/prepared weights.
pub fn standard_foods() -> Vec<FoodItem> {
    use FoodCategory::{Carb, Fat, Protein, Vegetable};

    vec![
        // Proteins
        food("Chicken Breast (grilled)", Protein, 165.0, 31.0, 0.0, 3.6, 0.0),
        food("Egg Whites (cooked)", Protein, 52.0, 11.0, 0.7, 0.2, 0.0),
        food("Greek Yogurt (0% fat)", Protein, 59.0, 10.0, 3.6, 0.7, 0.0),
        food("Lean Beef (95% lean)", Protein, 137.0, 26.0, 0.0, 4.0, 0.0),
        food("White Fish (tilapia)", Protein, 96.0, 20.0, 0.0, 1.7, 0.0),
        food("Cottage Cheese (1% fat)", Protein, 72.0, 12.0, 2.7, 1.0, 0.0),
        food("Turkey Breast (roasted)", Protein, 135.0, 30.0, 0.0, 1.0, 0.0),
        food("Shrimp (cooked)", Protein, 99.0, 24.0, 0.2, 0.3, 0.0),
        food("Salmon (baked)", Protein, 208.0, 20.0, 0.0, 13.0, 0.0),
        food("Whole Eggs (scrambled)", Protein, 149.0, 10.0, 1.6, 11.0, 0.0),
        // Carbs
        food("White Rice (cooked)", Carb, 130.0, 2.7, 28.0, 0.3, 0.4),
        food("Oats (dry weight)", Carb, 389.0, 17.0, 66.0, 7.0, 10.0),
        food("Sweet Potato (baked)", Carb, 86.0, 1.6, 20.0, 0.1, 3.0),
        food("Banana", Carb, 89.0, 1.1, 23.0, 0.3, 2.6),
        food("Whole Wheat Bread", Carb, 247.0, 13.0, 41.0, 3.4, 7.0),
        food("Quinoa (cooked)", Carb, 120.0, 4.4, 21.0, 1.9, 2.8),
        food("Potato (boiled)", Carb, 87.0, 1.9, 20.0, 0.1, 1.8),
        food("Cream of Rice (cooked)", Carb, 52.0, 1.0, 11.0, 0.2, 0.2),
        // Fats
        food("Avocado", Fat, 160.0, 2.0, 9.0, 15.0, 7.0),
        food("Almonds", Fat, 579.0, 21.0, 22.0, 50.0, 12.0),
        food("Peanut Butter (natural)", Fat, 588.0, 25.0, 20.0, 50.0, 6.0),
        food("Olive Oil (1 tbsp = 14g)", Fat, 884.0, 0.0, 0.0, 100.0, 0.0),
        // Vegetables
        food("Broccoli (steamed)", Vegetable, 35.0, 2.4, 7.0, 0.4, 3.3),
        food("Spinach (raw)", Vegetable, 23.0, 2.9, 3.6, 0.4, 2.2),
        food("Mixed Berries", Vegetable, 57.0, 0.7, 14.0, 0.3, 2.0),
        food("Asparagus (cooked)", Vegetable, 22.0, 2.4, 4.0, 0.2, 2.0),
        food("Bell Peppers (raw)", Vegetable, 31.0, 1.0, 6.0, 0.3, 2.1),
        food("Zucchini (cooked)", Vegetable, 17.0, 1.2, 3.0, 0.3, 1.0),
        food("Green Beans (cooked)", Vegetable, 35.0, 1.9, 8.0, 0.3, 3.4),
        food("Cucumber (raw)", Vegetable, 15.0, 0.7, 3.6, 0.1, 0.5),
    ]
}
