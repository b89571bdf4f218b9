//! Built-in catalog data for elements 1 to 118.
//!
//! Molar masses are conventional standard atomic weights in g/mol; for elements
//! without stable isotopes the mass number of the longest-lived isotope is used.
//! Lanthanides and actinides are placed in group 3.

/// `(atomic number, group, period, molar mass, name, symbol)`
pub(crate) type CatalogEntry = (u32, u32, u32, f64, &'static str, &'static str);

pub(crate) const STANDARD_ELEMENTS: [CatalogEntry; 118] = [
    (1, 1, 1, 1.008, "hydrogen", "H"),
    (2, 18, 1, 4.0026, "helium", "He"),
    (3, 1, 2, 6.94, "lithium", "Li"),
    (4, 2, 2, 9.0122, "beryllium", "Be"),
    (5, 13, 2, 10.81, "boron", "B"),
    (6, 14, 2, 12.011, "carbon", "C"),
    (7, 15, 2, 14.007, "nitrogen", "N"),
    (8, 16, 2, 15.999, "oxygen", "O"),
    (9, 17, 2, 18.998, "fluorine", "F"),
    (10, 18, 2, 20.180, "neon", "Ne"),
    (11, 1, 3, 22.990, "sodium", "Na"),
    (12, 2, 3, 24.305, "magnesium", "Mg"),
    (13, 13, 3, 26.982, "aluminium", "Al"),
    (14, 14, 3, 28.085, "silicon", "Si"),
    (15, 15, 3, 30.974, "phosphorus", "P"),
    (16, 16, 3, 32.06, "sulfur", "S"),
    (17, 17, 3, 35.45, "chlorine", "Cl"),
    (18, 18, 3, 39.948, "argon", "Ar"),
    (19, 1, 4, 39.098, "potassium", "K"),
    (20, 2, 4, 40.078, "calcium", "Ca"),
    (21, 3, 4, 44.956, "scandium", "Sc"),
    (22, 4, 4, 47.867, "titanium", "Ti"),
    (23, 5, 4, 50.942, "vanadium", "V"),
    (24, 6, 4, 51.996, "chromium", "Cr"),
    (25, 7, 4, 54.938, "manganese", "Mn"),
    (26, 8, 4, 55.845, "iron", "Fe"),
    (27, 9, 4, 58.933, "cobalt", "Co"),
    (28, 10, 4, 58.693, "nickel", "Ni"),
    (29, 11, 4, 63.546, "copper", "Cu"),
    (30, 12, 4, 65.38, "zinc", "Zn"),
    (31, 13, 4, 69.723, "gallium", "Ga"),
    (32, 14, 4, 72.630, "germanium", "Ge"),
    (33, 15, 4, 74.922, "arsenic", "As"),
    (34, 16, 4, 78.971, "selenium", "Se"),
    (35, 17, 4, 79.904, "bromine", "Br"),
    (36, 18, 4, 83.798, "krypton", "Kr"),
    (37, 1, 5, 85.468, "rubidium", "Rb"),
    (38, 2, 5, 87.62, "strontium", "Sr"),
    (39, 3, 5, 88.906, "yttrium", "Y"),
    (40, 4, 5, 91.224, "zirconium", "Zr"),
    (41, 5, 5, 92.906, "niobium", "Nb"),
    (42, 6, 5, 95.95, "molybdenum", "Mo"),
    (43, 7, 5, 98.0, "technetium", "Tc"),
    (44, 8, 5, 101.07, "ruthenium", "Ru"),
    (45, 9, 5, 102.91, "rhodium", "Rh"),
    (46, 10, 5, 106.42, "palladium", "Pd"),
    (47, 11, 5, 107.87, "silver", "Ag"),
    (48, 12, 5, 112.41, "cadmium", "Cd"),
    (49, 13, 5, 114.82, "indium", "In"),
    (50, 14, 5, 118.71, "tin", "Sn"),
    (51, 15, 5, 121.76, "antimony", "Sb"),
    (52, 16, 5, 127.60, "tellurium", "Te"),
    (53, 17, 5, 126.90, "iodine", "I"),
    (54, 18, 5, 131.29, "xenon", "Xe"),
    (55, 1, 6, 132.91, "caesium", "Cs"),
    (56, 2, 6, 137.33, "barium", "Ba"),
    (57, 3, 6, 138.91, "lanthanum", "La"),
    (58, 3, 6, 140.12, "cerium", "Ce"),
    (59, 3, 6, 140.91, "praseodymium", "Pr"),
    (60, 3, 6, 144.24, "neodymium", "Nd"),
    (61, 3, 6, 145.0, "promethium", "Pm"),
    (62, 3, 6, 150.36, "samarium", "Sm"),
    (63, 3, 6, 151.96, "europium", "Eu"),
    (64, 3, 6, 157.25, "gadolinium", "Gd"),
    (65, 3, 6, 158.93, "terbium", "Tb"),
    (66, 3, 6, 162.50, "dysprosium", "Dy"),
    (67, 3, 6, 164.93, "holmium", "Ho"),
    (68, 3, 6, 167.26, "erbium", "Er"),
    (69, 3, 6, 168.93, "thulium", "Tm"),
    (70, 3, 6, 173.05, "ytterbium", "Yb"),
    (71, 3, 6, 174.97, "lutetium", "Lu"),
    (72, 4, 6, 178.49, "hafnium", "Hf"),
    (73, 5, 6, 180.95, "tantalum", "Ta"),
    (74, 6, 6, 183.84, "tungsten", "W"),
    (75, 7, 6, 186.21, "rhenium", "Re"),
    (76, 8, 6, 190.23, "osmium", "Os"),
    (77, 9, 6, 192.22, "iridium", "Ir"),
    (78, 10, 6, 195.08, "platinum", "Pt"),
    (79, 11, 6, 196.97, "gold", "Au"),
    (80, 12, 6, 200.59, "mercury", "Hg"),
    (81, 13, 6, 204.38, "thallium", "Tl"),
    (82, 14, 6, 207.2, "lead", "Pb"),
    (83, 15, 6, 208.98, "bismuth", "Bi"),
    (84, 16, 6, 209.0, "polonium", "Po"),
    (85, 17, 6, 210.0, "astatine", "At"),
    (86, 18, 6, 222.0, "radon", "Rn"),
    (87, 1, 7, 223.0, "francium", "Fr"),
    (88, 2, 7, 226.0, "radium", "Ra"),
    (89, 3, 7, 227.0, "actinium", "Ac"),
    (90, 3, 7, 232.04, "thorium", "Th"),
    (91, 3, 7, 231.04, "protactinium", "Pa"),
    (92, 3, 7, 238.03, "uranium", "U"),
    (93, 3, 7, 237.0, "neptunium", "Np"),
    (94, 3, 7, 244.0, "plutonium", "Pu"),
    (95, 3, 7, 243.0, "americium", "Am"),
    (96, 3, 7, 247.0, "curium", "Cm"),
    (97, 3, 7, 247.0, "berkelium", "Bk"),
    (98, 3, 7, 251.0, "californium", "Cf"),
    (99, 3, 7, 252.0, "einsteinium", "Es"),
    (100, 3, 7, 257.0, "fermium", "Fm"),
    (101, 3, 7, 258.0, "mendelevium", "Md"),
    (102, 3, 7, 259.0, "nobelium", "No"),
    (103, 3, 7, 266.0, "lawrencium", "Lr"),
    (104, 4, 7, 267.0, "rutherfordium", "Rf"),
    (105, 5, 7, 268.0, "dubnium", "Db"),
    (106, 6, 7, 269.0, "seaborgium", "Sg"),
    (107, 7, 7, 270.0, "bohrium", "Bh"),
    (108, 8, 7, 277.0, "hassium", "Hs"),
    (109, 9, 7, 278.0, "meitnerium", "Mt"),
    (110, 10, 7, 281.0, "darmstadtium", "Ds"),
    (111, 11, 7, 282.0, "roentgenium", "Rg"),
    (112, 12, 7, 285.0, "copernicium", "Cn"),
    (113, 13, 7, 286.0, "nihonium", "Nh"),
    (114, 14, 7, 290.0, "flerovium", "Fl"),
    (115, 15, 7, 290.0, "moscovium", "Mc"),
    (116, 16, 7, 293.0, "livermorium", "Lv"),
    (117, 17, 7, 294.0, "tennessine", "Ts"),
    (118, 18, 7, 294.0, "oganesson", "Og"),
];
