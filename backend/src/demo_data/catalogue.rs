//! Fixed demo catalogue.

pub(super) struct DemoUser {
    pub username: &'static str,
    pub email: &'static str,
}

pub(super) struct DemoIngredientLine {
    pub name: &'static str,
    pub quantity: f64,
    pub unit: &'static str,
}

pub(super) struct DemoRecipe {
    pub title: &'static str,
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub preparation_time: u32,
    pub difficulty: &'static str,
    pub author: &'static str,
    pub ingredients: &'static [DemoIngredientLine],
}

pub(super) struct DemoRating {
    pub recipe: &'static str,
    pub rater: &'static str,
    pub score: i64,
    pub comment: &'static str,
}

pub(super) const USERS: &[DemoUser] = &[
    DemoUser { username: "Alvaro", email: "alvaro@gmail.com" },
    DemoUser { username: "Bobby", email: "bobby@gmail.com" },
    DemoUser { username: "Charlie", email: "charlie@gmail.com" },
    DemoUser { username: "Diana", email: "diana@gmail.com" },
    DemoUser { username: "Elena", email: "elena@gmail.com" },
    DemoUser { username: "Fernando", email: "fernando@gmail.com" },
];

pub(super) const INGREDIENTS: &[&str] = &[
    "Salt", "Pepper", "Water", "Sugar", "Flour", "Eggs", "Olive Oil",
];

const fn line(name: &'static str, quantity: f64, unit: &'static str) -> DemoIngredientLine {
    DemoIngredientLine {
        name,
        quantity,
        unit,
    }
}

pub(super) const RECIPES: &[DemoRecipe] = &[
    DemoRecipe {
        title: "Scrambled eggs",
        description: "Scrambled eggs are a quick and easy breakfast dish that can be \
            customized with a variety of ingredients.",
        steps: &[
            "Crack the desired number of eggs into a bowl.",
            "Add a pinch of salt and pepper to taste.",
            "Beat the eggs until well combined.",
            "Heat a non-stick skillet over medium heat.",
            "Pour the beaten eggs into the skillet.",
            "Stir gently as the eggs cook, until they reach the desired consistency.",
            "Serve hot.",
        ],
        preparation_time: 5,
        difficulty: "easy",
        author: "Alvaro",
        ingredients: &[
            line("Eggs", 2.0, "unit"),
            line("Salt", 1.0, "grams"),
            line("Pepper", 1.0, "grams"),
        ],
    },
    DemoRecipe {
        title: "Boiled eggs",
        description: "Boiled eggs are a simple and versatile dish that can be enjoyed on \
            their own or used in a variety of recipes.",
        steps: &[
            "Place the eggs in a saucepan and cover with water.",
            "Bring the water to a boil over medium-high heat.",
            "Remove the pan from the heat and cover with a lid.",
            "Leave the eggs for 4 minutes for soft, 6 for medium, or 10 for hard-boiled.",
            "Cool the eggs in a bowl of ice water.",
            "Peel and serve.",
        ],
        preparation_time: 5,
        difficulty: "easy",
        author: "Bobby",
        ingredients: &[line("Eggs", 1.0, "unit")],
    },
    DemoRecipe {
        title: "Fried eggs",
        description: "Fried eggs are a classic breakfast dish that can be prepared in a \
            variety of ways.",
        steps: &[
            "Heat a non-stick skillet over medium heat.",
            "Add oil to the skillet.",
            "Crack the eggs into the skillet.",
            "Cook until the whites are set and the yolks are still runny.",
            "Season with salt and pepper to taste.",
            "Serve hot.",
        ],
        preparation_time: 5,
        difficulty: "easy",
        author: "Charlie",
        ingredients: &[line("Eggs", 2.0, "unit"), line("Olive Oil", 1.0, "teaspoon")],
    },
    DemoRecipe {
        title: "Poached eggs",
        description: "Poached eggs are a delicate dish that can be enjoyed on their own \
            or used to top salads and toast.",
        steps: &[
            "Bring a saucepan of water to a simmer.",
            "Add a splash of vinegar to the water.",
            "Crack the eggs into a small bowl.",
            "Gently slide the eggs into the simmering water.",
            "Cook for 3-4 minutes, until the whites are set.",
            "Drain on a paper towel and serve hot.",
        ],
        preparation_time: 5,
        difficulty: "easy",
        author: "Diana",
        ingredients: &[line("Eggs", 2.0, "unit")],
    },
    DemoRecipe {
        title: "Baked eggs",
        description: "Baked eggs are a simple dish that can be customized with a variety \
            of ingredients.",
        steps: &[
            "Preheat the oven to 180°C.",
            "Grease a baking dish with oil.",
            "Crack the eggs into the baking dish.",
            "Season with salt and pepper to taste.",
            "Bake for 10-15 minutes, until the whites are set.",
            "Serve hot.",
        ],
        preparation_time: 5,
        difficulty: "easy",
        author: "Elena",
        ingredients: &[line("Eggs", 2.0, "unit")],
    },
    DemoRecipe {
        title: "Omelette",
        description: "Omelettes are a versatile dish that can be customized with a \
            variety of fillings.",
        steps: &[
            "Crack the desired number of eggs into a bowl.",
            "Add a splash of milk and a pinch of salt and pepper.",
            "Beat the eggs until well combined.",
            "Heat a non-stick skillet over medium heat.",
            "Pour the beaten eggs into the skillet.",
            "Cook until the eggs are set but still slightly runny.",
            "Add fillings to one half, fold, and serve hot.",
        ],
        preparation_time: 5,
        difficulty: "easy",
        author: "Fernando",
        ingredients: &[
            line("Eggs", 2.0, "unit"),
            line("Salt", 1.0, "grams"),
            line("Pepper", 1.0, "grams"),
        ],
    },
];

pub(super) const RATINGS: &[DemoRating] = &[
    DemoRating { recipe: "Scrambled eggs", rater: "Alvaro", score: 5, comment: "Delicious!" },
    DemoRating { recipe: "Boiled eggs", rater: "Bobby", score: 4, comment: "Yummy!" },
    DemoRating { recipe: "Fried eggs", rater: "Charlie", score: 3, comment: "Not too bad" },
    DemoRating { recipe: "Poached eggs", rater: "Diana", score: 2, comment: "Could be better" },
    DemoRating { recipe: "Baked eggs", rater: "Elena", score: 1, comment: "Not my favorite" },
    DemoRating { recipe: "Omelette", rater: "Fernando", score: 0, comment: "Disgusting" },
];
