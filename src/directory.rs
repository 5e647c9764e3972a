use crate::geo::LatLon;

/// One physical school in the network. The directory is read-only for
/// the lifetime of a page view; records are never created or destroyed.
#[derive(Clone, Copy, Debug)]
pub struct UnitRecord {
    pub id: u32,
    pub name: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub map_query: &'static str,
    pub featured: bool,
    pub latlon: LatLon,
}

#[allow(clippy::too_many_arguments)]
const fn unit(
    id: u32,
    name: &'static str,
    city: &'static str,
    state: &'static str,
    address: &'static str,
    phone: &'static str,
    map_query: &'static str,
    featured: bool,
    lat: f64,
    lng: f64,
) -> UnitRecord {
    UnitRecord {
        id,
        name,
        city,
        state,
        address,
        phone,
        map_query,
        featured,
        latlon: LatLon::new(lat, lng),
    }
}

/// Every unit in the network. The first record is the flagship and the
/// default selection when no position fix arrives.
pub static DIRECTORY: [UnitRecord; 22] = [
    // Goiás
    unit(1, "USGO Itumbiara - Centro", "Itumbiara", "GO", "Centro, Itumbiara - GO", "(64) 99999-9999", "USGO Jiu Jitsu Itumbiara Centro GO", true, -18.4097, -49.2181),
    unit(2, "USGO Itumbiara - N.S. Saúde", "Itumbiara", "GO", "Bairro Nossa Senhora da Saúde, Itumbiara - GO", "(64) 99999-9999", "Nossa Senhora da Saude Itumbiara GO", false, -18.4150, -49.2100),
    unit(3, "USGO Itumbiara - Paranaíba", "Itumbiara", "GO", "Bairro Paranaíba, Itumbiara - GO", "(64) 99999-9999", "Bairro Paranaiba Itumbiara GO", false, -18.4050, -49.2250),
    unit(4, "USGO Itumbiara", "Itumbiara", "GO", "Itumbiara - GO", "(64) 99999-9999", "Itumbiara Goias", false, -18.4097, -49.2181),
    unit(5, "USGO Aparecida - Pq. Rio das Pedras", "Aparecida de Goiânia", "GO", "Pq. Rio das Pedras, Aparecida de Goiânia - GO", "(62) 99999-9999", "Parque Rio das Pedras Aparecida de Goiania GO", false, -16.8200, -49.2450),
    unit(6, "USGO Aparecida - Construindo Campeões", "Aparecida de Goiânia", "GO", "Proj. Construindo Campeões, Aparecida de Goiânia - GO", "(62) 99999-9999", "Aparecida de Goiania GO", false, -16.8230, -49.2430),
    unit(7, "USGO Aparecida - Pq. Vera Cruz", "Aparecida de Goiânia", "GO", "Pq. Vera Cruz, Aparecida de Goiânia - GO", "(62) 99999-9999", "Parque Vera Cruz Aparecida de Goiania GO", false, -16.8250, -49.2480),
    unit(8, "USGO Bom Jesus", "Bom Jesus", "GO", "Bom Jesus - GO", "(64) 99999-9999", "Bom Jesus Goias", false, -18.2167, -49.7392),
    unit(9, "USGO Buriti Alegre", "Buriti Alegre", "GO", "Buriti Alegre - GO", "(64) 99999-9999", "Buriti Alegre Goias", false, -18.1386, -49.0403),
    unit(10, "USGO Caldas Novas - Serrinha", "Caldas Novas", "GO", "St. Serrinha, Caldas Novas - GO", "(64) 99999-9999", "Setor Serrinha Caldas Novas GO", false, -17.7417, -48.6253),
    unit(11, "USGO Caldas Novas - Nova Canaã", "Caldas Novas", "GO", "Res. Nova Canaã, Caldas Novas - GO", "(64) 99999-9999", "Residencial Nova Canaa Caldas Novas GO", false, -17.7450, -48.6280),
    unit(12, "USGO Caldas Novas - Jd. Tangará", "Caldas Novas", "GO", "Jd. Tangará, Caldas Novas - GO", "(64) 99999-9999", "Jardim Tangara Caldas Novas GO", false, -17.7480, -48.6220),
    unit(13, "USGO Joviânia", "Joviânia", "GO", "Joviânia - GO", "(64) 99999-9999", "Joviania Goias", false, -17.8031, -49.6117),
    unit(14, "USGO Morrinhos", "Morrinhos", "GO", "Morrinhos - GO", "(64) 99999-9999", "Morrinhos Goias", false, -17.7319, -49.1014),
    unit(15, "USGO Morrinhos - Assoc. IBI", "Morrinhos", "GO", "Associação Cultural e Educativa IBI, Morrinhos - GO", "(64) 99999-9999", "Morrinhos Goias", false, -17.7350, -49.0980),
    unit(16, "USGO Quirinópolis", "Quirinópolis", "GO", "Quirinópolis - GO", "(64) 99999-9999", "Quirinopolis Goias", false, -18.4483, -50.4514),
    unit(17, "USGO Rio Quente", "Rio Quente", "GO", "Rio Quente - GO", "(64) 99999-9999", "Rio Quente Goias", false, -17.7756, -48.7664),
    unit(18, "USGO Vianópolis", "Vianópolis", "GO", "Vianópolis - GO", "(62) 99999-9999", "Vianopolis Goias", false, -16.7414, -48.5164),
    // Minas Gerais
    unit(19, "USGO Uberlândia - Segismundo Pereira", "Uberlândia", "MG", "Bairro Segismundo Pereira, Uberlândia - MG", "(34) 99999-9999", "Segismundo Pereira Uberlandia MG", false, -18.9186, -48.2772),
    unit(20, "USGO Uberlândia - Marta Helena", "Uberlândia", "MG", "Bairro Marta Helena, Uberlândia - MG", "(34) 99999-9999", "Marta Helena Uberlandia MG", false, -18.8850, -48.2650),
    // Mato Grosso do Sul
    unit(21, "USGO Batayporã", "Batayporã", "MS", "Batayporã - MS", "(67) 99999-9999", "Bataypora Mato Grosso do Sul", false, -22.2947, -53.2697),
    unit(22, "USGO Nova Andradina", "Nova Andradina", "MS", "Nova Andradina - MS", "(67) 99999-9999", "Nova Andradina Mato Grosso do Sul", false, -22.2353, -53.3436),
];

pub fn by_id(id: u32) -> Option<&'static UnitRecord> {
    DIRECTORY.iter().find(|u| u.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = DIRECTORY.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), DIRECTORY.len());
    }

    #[test]
    fn coordinates_are_valid_decimal_degrees() {
        for u in &DIRECTORY {
            assert!((-90.0..=90.0).contains(&u.latlon.lat()), "{}", u.name);
            assert!((-180.0..=180.0).contains(&u.latlon.lng()), "{}", u.name);
        }
    }

    #[test]
    fn first_record_is_the_single_flagship() {
        assert!(DIRECTORY[0].featured);
        assert_eq!(DIRECTORY.iter().filter(|u| u.featured).count(), 1);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(by_id(22).map(|u| u.city), Some("Nova Andradina"));
        assert!(by_id(99).is_none());
    }
}
