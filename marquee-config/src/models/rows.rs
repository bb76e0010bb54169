use marquee_model::RowSpec;

/// The five production rows, in display order.
///
/// Row ids and labels do not line up (`comedy-movies` is labelled "Action");
/// ids are what page templates bind to, so they stay as they are.
pub fn default_rows() -> Vec<RowSpec> {
    vec![
        RowSpec::new(
            "popular-movies",
            "New this week",
            [
                "avengers",
                "extraction",
                "inception",
                "matrix",
                "interstellar",
                "titanic",
                "godfather",
                "shawshank",
                "pulp fiction",
                "fight club",
            ],
        ),
        RowSpec::new(
            "action-movies",
            "Trending Now",
            [
                "pathaan",
                "mission impossible",
                "fast furious",
                "john wick",
                "marvel",
                "batman",
                "dune",
                "top gun",
                "bond",
                "spider man",
            ],
        ),
        RowSpec::new(
            "comedy-movies",
            "Action",
            [
                "action",
                "superhero",
                "marvel",
                "fast furious",
                "mission impossible",
                "john wick",
                "expendables",
                "terminator",
                "rambo",
                "die hard",
            ],
        ),
        RowSpec::new(
            "drama-movies",
            "Drama",
            [
                "drama",
                "oscar",
                "schindler",
                "forrest gump",
                "green mile",
                "shawshank",
                "godfather",
                "prestige",
                "departed",
                "gone girl",
            ],
        ),
        RowSpec::new(
            "thriller-movies",
            "Thriller",
            [
                "thriller",
                "suspense",
                "se7en",
                "silence of the lambs",
                "shutter island",
                "gone girl",
                "prisoners",
                "zodiac",
                "memento",
                "sixth sense",
            ],
        ),
    ]
}
