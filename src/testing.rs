//! Test fixtures
//!
//! A small recipe collection with known overlaps: "tar" hits two names,
//! "coco" one ingredient, Beurre appears in three recipes and Four is
//! shared by two.
//!
//! Only available when compiled with `cfg(test)`.

use crate::recipes::{Ingredient, Recipe};

/// Five recipes in a fixed order
#[must_use]
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Tarte aux pommes")
            .with_description("Étaler la pâte, disposer les pommes en rosace et cuire 40 minutes.")
            .with_appliance("Four")
            .with_ingredient(Ingredient::new("Pomme").with_quantity(4.0))
            .with_ingredient(Ingredient::new("Beurre").with_quantity(50.0).with_unit("g"))
            .with_ingredient(Ingredient::new("Oeuf").with_quantity(2.0))
            .with_ingredient(Ingredient::new("Sucre").with_quantity(100.0).with_unit("g"))
            .with_utensil("moule à tarte")
            .with_utensil("saladier")
            .with_time(50)
            .with_servings(6),
        Recipe::new(2, "Limonade de coco")
            .with_description("Mixer le lait avec le jus des citrons et le sucre, servir frais.")
            .with_appliance("Blender")
            .with_ingredient(Ingredient::new("Lait de coco").with_quantity(400.0).with_unit("ml"))
            .with_ingredient(Ingredient::new("Citron").with_quantity(2.0))
            .with_ingredient(Ingredient::new("Sucre").with_quantity(30.0).with_unit("g"))
            .with_utensil("verres")
            .with_utensil("presse citron")
            .with_time(10)
            .with_servings(2),
        Recipe::new(3, "Tartelettes au chocolat")
            .with_description("Remplir les fonds de ganache et laisser prendre au frais.")
            .with_appliance("Four")
            .with_ingredient(Ingredient::new("Chocolat").with_quantity(200.0).with_unit("g"))
            .with_ingredient(Ingredient::new("Beurre").with_quantity(30.0).with_unit("g"))
            .with_ingredient(Ingredient::new("Crème").with_quantity(20.0).with_unit("cl"))
            .with_utensil("moule à tartelettes")
            .with_time(45)
            .with_servings(4),
        Recipe::new(4, "Crêpes")
            .with_description("Mélanger la farine, les oeufs et le lait, laisser reposer une heure.")
            .with_appliance("Poêle")
            .with_ingredient(Ingredient::new("Œuf").with_quantity(3.0))
            .with_ingredient(Ingredient::new("Lait").with_quantity(50.0).with_unit("cl"))
            .with_ingredient(Ingredient::new("Farine").with_quantity(250.0).with_unit("g"))
            .with_ingredient(Ingredient::new("Beurre").with_quantity(20.0).with_unit("g"))
            .with_utensil("saladier")
            .with_utensil("louche")
            .with_time(30)
            .with_servings(4),
        Recipe::new(5, "Soupe de tomates")
            .with_description("Faire revenir les oignons, ajouter les tomates puis mixer.")
            .with_appliance("Mixer")
            .with_ingredient(Ingredient::new("Tomate").with_quantity(6.0))
            .with_ingredient(Ingredient::new("Oignon").with_quantity(1.0))
            .with_utensil("casserole")
            .with_time(25)
            .with_servings(4),
    ]
}

/// Recipe names, in order
#[must_use]
pub fn names(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_unique() {
        let recipes = sample_recipes();
        let mut ids: Vec<u32> = recipes.iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), recipes.len());
    }

    #[test]
    fn test_names() {
        let recipes = sample_recipes();
        assert_eq!(names(&recipes[..2]), vec!["Tarte aux pommes", "Limonade de coco"]);
    }
}
