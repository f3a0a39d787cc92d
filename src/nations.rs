//! FUTBIN nation ids.
//!
//! The table is sorted by id; name lookups go through an index built on first
//! use. Both directions are read-only and safe to share across threads.

use std::collections::HashMap;
use std::sync::LazyLock;

pub static NATIONS: &[(u32, &str)] = &[
    (1, "Afghanistan"),
    (2, "Albania"),
    (3, "Algeria"),
    (4, "Andorra"),
    (5, "Angola"),
    (6, "Antigua and Barbuda"),
    (7, "Argentina"),
    (8, "Armenia"),
    (9, "Aruba"),
    (10, "Australia"),
    (11, "Austria"),
    (12, "Azerbaijan"),
    (13, "Bahrain"),
    (14, "Barbados"),
    (15, "Belarus"),
    (16, "Belgium"),
    (17, "Belize"),
    (18, "Benin"),
    (19, "Bermuda"),
    (20, "Bolivia"),
    (21, "Bosnia and Herzegovina"),
    (22, "Brazil"),
    (23, "Bulgaria"),
    (24, "Burkina Faso"),
    (25, "Burundi"),
    (26, "Cameroon"),
    (27, "Canada"),
    (28, "Cape Verde Islands"),
    (29, "Central African Republic"),
    (30, "Chad"),
    (31, "Chile"),
    (32, "China PR"),
    (33, "Colombia"),
    (34, "Comoros"),
    (35, "Congo"),
    (36, "Congo DR"),
    (37, "Costa Rica"),
    (38, "Côte d'Ivoire"),
    (39, "Croatia"),
    (40, "Cuba"),
    (41, "Curaçao"),
    (42, "Cyprus"),
    (43, "Czechia"),
    (44, "Denmark"),
    (45, "Dominican Republic"),
    (46, "Ecuador"),
    (47, "Egypt"),
    (48, "El Salvador"),
    (49, "England"),
    (50, "Equatorial Guinea"),
    (51, "Eritrea"),
    (52, "Estonia"),
    (53, "Eswatini"),
    (54, "Ethiopia"),
    (55, "Faroe Islands"),
    (56, "Fiji"),
    (57, "Finland"),
    (58, "France"),
    (59, "Gabon"),
    (60, "Gambia"),
    (61, "Georgia"),
    (62, "Germany"),
    (63, "Ghana"),
    (64, "Gibraltar"),
    (65, "Greece"),
    (66, "Grenada"),
    (67, "Guadeloupe"),
    (68, "Guam"),
    (69, "Guatemala"),
    (70, "Guinea"),
    (71, "Guinea-Bissau"),
    (72, "Guyana"),
    (73, "Haiti"),
    (74, "Honduras"),
    (75, "Hong Kong"),
    (76, "Hungary"),
    (77, "Iceland"),
    (78, "India"),
    (79, "Indonesia"),
    (80, "Iran"),
    (81, "Iraq"),
    (82, "Israel"),
    (83, "Italy"),
    (84, "Jamaica"),
    (85, "Japan"),
    (86, "Jordan"),
    (87, "Kazakhstan"),
    (88, "Kenya"),
    (89, "Korea DPR"),
    (90, "Korea Republic"),
    (91, "Kosovo"),
    (92, "Kuwait"),
    (93, "Kyrgyzstan"),
    (94, "Latvia"),
    (95, "Lebanon"),
    (96, "Liberia"),
    (97, "Libya"),
    (98, "Liechtenstein"),
    (99, "Lithuania"),
    (100, "Luxembourg"),
    (101, "Madagascar"),
    (102, "Malawi"),
    (103, "Malaysia"),
    (104, "Mali"),
    (105, "Malta"),
    (106, "Martinique"),
    (107, "Mauritania"),
    (108, "Mauritius"),
    (109, "Mexico"),
    (110, "Moldova"),
    (111, "Montenegro"),
    (112, "Montserrat"),
    (113, "Morocco"),
    (114, "Mozambique"),
    (115, "Namibia"),
    (116, "Netherlands"),
    (117, "New Caledonia"),
    (118, "New Zealand"),
    (119, "Nicaragua"),
    (120, "Niger"),
    (121, "Nigeria"),
    (122, "North Macedonia"),
    (123, "Northern Ireland"),
    (124, "Norway"),
    (125, "Oman"),
    (126, "Palestine"),
    (127, "Panama"),
    (128, "Papua New Guinea"),
    (129, "Paraguay"),
    (130, "Peru"),
    (131, "Philippines"),
    (132, "Poland"),
    (133, "Portugal"),
    (134, "Puerto Rico"),
    (135, "Qatar"),
    (136, "Republic of Ireland"),
    (137, "Romania"),
    (138, "Russia"),
    (139, "Rwanda"),
    (140, "Saudi Arabia"),
    (141, "Scotland"),
    (142, "Senegal"),
    (143, "Serbia"),
    (144, "Sierra Leone"),
    (145, "Singapore"),
    (146, "Slovakia"),
    (147, "Slovenia"),
    (148, "South Africa"),
    (149, "South Sudan"),
    (150, "Spain"),
    (151, "Sri Lanka"),
    (152, "St. Kitts and Nevis"),
    (153, "St. Lucia"),
    (154, "Sudan"),
    (155, "Suriname"),
    (156, "Sweden"),
    (157, "Switzerland"),
    (158, "Syria"),
    (159, "Tahiti"),
    (160, "Tajikistan"),
    (161, "Tanzania"),
    (162, "Thailand"),
    (163, "Togo"),
    (164, "Trinidad and Tobago"),
    (165, "Tunisia"),
    (166, "Türkiye"),
    (167, "Turkmenistan"),
    (168, "Uganda"),
    (169, "Ukraine"),
    (170, "United Arab Emirates"),
    (171, "United States"),
    (172, "Uruguay"),
    (173, "Uzbekistan"),
    (174, "Venezuela"),
    (175, "Vietnam"),
    (176, "Wales"),
    (177, "Yemen"),
    (178, "Zambia"),
    (179, "Zimbabwe"),
];

static BY_NAME: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| NATIONS.iter().map(|&(id, name)| (name, id)).collect());

pub fn get_nation_name(id: u32) -> Option<&'static str> {
    NATIONS
        .binary_search_by_key(&id, |&(nation_id, _)| nation_id)
        .ok()
        .map(|index| NATIONS[index].1)
}

/// Exact, case-sensitive match on the FUTBIN spelling.
pub fn get_nation_id(name: &str) -> Option<u32> {
    BY_NAME.get(name).copied()
}
