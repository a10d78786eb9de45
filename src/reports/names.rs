//! Display names for IBGE state and municipality codes.

const STATE_NAMES: &[(&str, &str)] = &[
    ("11", "Rondônia"),
    ("12", "Acre"),
    ("13", "Amazonas"),
    ("14", "Roraima"),
    ("15", "Pará"),
    ("16", "Amapá"),
    ("17", "Tocantins"),
    ("21", "Maranhão"),
    ("22", "Piauí"),
    ("23", "Ceará"),
    ("24", "Rio Grande do Norte"),
    ("25", "Paraíba"),
    ("26", "Pernambuco"),
    ("27", "Alagoas"),
    ("28", "Sergipe"),
    ("29", "Bahia"),
    ("31", "Minas Gerais"),
    ("32", "Espírito Santo"),
    ("33", "Rio de Janeiro"),
    ("35", "São Paulo"),
    ("41", "Paraná"),
    ("42", "Santa Catarina"),
    ("43", "Rio Grande do Sul"),
    ("50", "Mato Grosso do Sul"),
    ("51", "Mato Grosso"),
    ("52", "Goiás"),
    ("53", "Distrito Federal"),
];

/// Santa Catarina municipalities tracked by the dashboard.
const MUNICIPALITY_NAMES: &[(&str, &str)] = &[
    ("420540", "Florianópolis"),
    ("420820", "Joinville"),
    ("420200", "Blumenau"),
    ("420420", "Balneário Camboriú"),
    ("420910", "Lages"),
    ("420830", "Jaraguá do Sul"),
    ("421660", "São José"),
    ("421720", "São Miguel do Oeste"),
    ("420240", "Brusque"),
    ("420890", "Itajaí"),
    ("420460", "Criciúma"),
];

/// IBGE code of Criciúma.
pub const CRICIUMA: &str = "420460";

pub fn state_name(code: &str) -> String {
    lookup(STATE_NAMES, code).unwrap_or_else(|| format!("UF {}", code.trim()))
}

pub fn municipality_name(code: &str) -> String {
    lookup(MUNICIPALITY_NAMES, code).unwrap_or_else(|| format!("Município {}", code.trim()))
}

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<String> {
    let code = code.trim();
    table
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| (*name).to_string())
}
