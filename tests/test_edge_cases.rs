use recipe_parse::{build_save_payload, parse_recipe, parse_recipe_to_json, RecipeError};

#[test]
fn test_empty_input_yields_no_record() {
    assert_eq!(parse_recipe(""), None);
    assert_eq!(parse_recipe("   \n  \t"), None);
}

#[test]
fn test_parsing_twice_yields_identical_records() {
    let text = "Title: Veggie Stir Fry. Ingredients: 2 cups broccoli 1 tablespoon soy sauce Directions: Heat oil. Add broccoli. Cook 5 minutes.";
    assert_eq!(parse_recipe(text), parse_recipe(text));
}

#[test]
fn test_every_direction_ends_with_exactly_one_period() {
    let inputs = [
        "Directions: Heat oil. Add broccoli. Cook 5 minutes.",
        "Directions: Whisk eggs. Serve warm",
        "Directions: Wait... then serve",
        "Just eat a sandwich",
    ];

    for text in inputs {
        let recipe = parse_recipe(text).unwrap();
        for step in &recipe.directions {
            assert!(step.ends_with('.'), "step {step:?} from {text:?}");
            assert!(!step.ends_with(".."), "step {step:?} from {text:?}");
        }
    }
}

#[test]
fn test_title_is_normalized_to_sentence_case() {
    let recipe = parse_recipe("title: SPICY peanut NOODLES. Ingredients: 1 cup peanuts").unwrap();
    assert_eq!(recipe.title, "Spicy peanut noodles");
}

#[test]
fn test_quantity_without_space_before_unit() {
    let recipe = parse_recipe("Ingredients: 2cups flour 1tsp salt Directions: Mix.").unwrap();
    assert_eq!(recipe.ingredients, vec!["2cups flour", "1tsp salt"]);
}

#[test]
fn test_unicode_text_around_markers() {
    let text = "Title: Crème Brûlée. Ingredients: 2 cups cream 5 teaspoons sugar Directions: Chill. Caramelize the top.";

    let recipe = parse_recipe(text).unwrap();

    assert_eq!(recipe.title, "Crème brûlée");
    assert_eq!(recipe.ingredients, vec!["2 cups cream", "5 teaspoons sugar"]);
    assert_eq!(recipe.directions, vec!["Chill.", "Caramelize the top."]);
}

#[test]
fn test_json_surface_round_trips_the_record() {
    let text = "Title: Toast. Ingredients: 2 slices bread Directions: Toast.";

    let json = parse_recipe_to_json(text).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["title"], "Toast");
    assert_eq!(value["ingredients"][0], "2 slices bread");
    assert_eq!(value["directions"][0], "Toast.");
}

#[test]
fn test_json_surface_rejects_empty_input() {
    assert!(matches!(
        parse_recipe_to_json(""),
        Err(RecipeError::EmptyInput)
    ));
}

#[test]
fn test_save_payload_carries_original_ingredients() {
    let text = "Title: Toast. Ingredients: 2 slices bread Directions: Toast.";

    let payload = build_save_payload(text, "bread, butter").unwrap();

    assert_eq!(payload.title, "Toast");
    assert_eq!(payload.ingredients, vec!["2 slices bread"]);
    assert_eq!(payload.directions, vec!["Toast."]);
    assert_eq!(payload.original_ingredients, "bread, butter");
}
