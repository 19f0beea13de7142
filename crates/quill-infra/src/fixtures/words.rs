pub(super) const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Dennis", "Edsger", "Frances", "Grace", "Hedy", "Ivan",
    "John", "Katherine", "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Shafi", "Tim", "Yukihiro",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Allen", "Berners-Lee", "Dijkstra", "Goldwasser", "Hamilton", "Hopper", "Johnson", "Kay",
    "Knuth", "Lamarr", "Liskov", "Lovelace", "Matsumoto", "Perlman", "Ritchie", "Shannon",
    "Sutherland", "Thompson", "Torvalds", "Wirth",
];

pub(super) const WORDS: &[&str] = &[
    "alpha", "anchor", "autumn", "beacon", "binary", "bridge", "cadence", "canvas", "cedar",
    "cipher", "comet", "copper", "delta", "drift", "ember", "engine", "fabric", "falcon", "fjord",
    "garden", "glacier", "harbor", "horizon", "island", "jasper", "kernel", "lantern", "lattice",
    "meadow", "mirror", "nebula", "needle", "orbit", "orchard", "paper", "pixel", "quartz",
    "quiet", "river", "rocket", "saddle", "signal", "spiral", "summit", "thread", "timber",
    "tundra", "umbra", "valley", "vector", "willow", "window", "yonder", "zephyr",
];
