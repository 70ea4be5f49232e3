use serde::Serialize;

/// A dinosaur record shown on the home page and its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dinosaur {
    pub name: &'static str,
    pub diet: &'static str,
    pub length: &'static str,
    /// Not every record has a known weight
    pub weight: Option<&'static str>,
    pub info: &'static str,
}

static DINOSAURS: [Dinosaur; 2] = [
    Dinosaur {
        name: "Tyrannosaurus",
        diet: "carnivorous",
        length: "12m",
        weight: None,
        info: "Tyrannosaurus is well-represented in both fiction and history with over 50 \
specimens discovered. It was one of the last non-avian dinosaurs to exist before the \
extinction event. Tyrannosaurus had a massive skull and a long heavy tail.",
    },
    Dinosaur {
        name: "Brachiosaurus",
        diet: "herbivorous",
        length: "30m",
        weight: None,
        info: "Brachiosaurus was a large, North American sauropod dinosaur with an arch \
encircling its nasal opening.",
    },
];

/// All records, in display order.
pub fn all() -> &'static [Dinosaur] {
    &DINOSAURS
}

/// Find a record by its exact name.
pub fn find(name: &str) -> Option<&'static Dinosaur> {
    DINOSAURS.iter().find(|dinosaur| dinosaur.name == name)
}
