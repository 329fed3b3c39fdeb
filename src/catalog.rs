//! Supported districts, keyed by display name, with the FAO GAUL level-2
//! name the boundary query uses.

use crate::error::{Error, Result};

pub struct District {
    pub display: &'static str,
    pub gaul_name: &'static str,
}

const fn d(display: &'static str, gaul_name: &'static str) -> District {
    District { display, gaul_name }
}

const TAMIL_NADU: &[District] = &[
    d("Ariyalur", "Ariyalur"),
    d("Chennai", "Chennai"),
    d("Coimbatore", "Coimbatore"),
    d("Cuddalore", "Cuddalore"),
    d("Dharmapuri", "Dharmapuri"),
    d("Dindigul", "Dindigul"),
    d("Erode", "Erode"),
    d("Kancheepuram", "Kancheepuram"),
    d("Kanyakumari", "Kanniyakumari"),
    d("Karur", "Karur"),
    d("Krishnagiri", "Krishnagiri"),
    d("Madurai", "Madurai"),
    d("Nagapattinam", "Nagapattinam"),
    d("Namakkal", "Namakkal"),
    d("Perambalur", "Perambalur"),
    d("Pudukkottai", "Pudukkottai"),
    d("Ramanathapuram", "Ramanathapuram"),
    d("Salem", "Salem"),
    d("Sivaganga", "Sivaganga"),
    d("Thanjavur", "Thanjavur"),
    d("The Nilgiris", "The Nilgiris"),
    d("Theni", "Theni"),
    d("Thiruvallur", "Thiruvallur"),
    d("Thiruvarur", "Thiruvarur"),
    d("Thoothukkudi", "Thoothukkudi"),
    d("Tiruchirappalli (Trichy)", "Tiruchchirappalli"),
    d("Tirunelveli", "Tirunelveli"),
    d("Tiruppur", "Tiruppur"),
    d("Tiruvannamalai", "Tiruvannamalai"),
    d("Vellore", "Vellore"),
    d("Viluppuram", "Viluppuram"),
    d("Virudhunagar", "Virudhunagar"),
];

const KERALA: &[District] = &[
    d("Alappuzha", "Alappuzha"),
    d("Ernakulam", "Ernakulam"),
    d("Idukki", "Idukki"),
    d("Kannur", "Kannur"),
    d("Kasaragod", "Kasaragod"),
    d("Kollam", "Kollam"),
    d("Kottayam", "Kottayam"),
    d("Kozhikode", "Kozhikode"),
    d("Malappuram", "Malappuram"),
    d("Palakkad", "Palakkad"),
    d("Pathanamthitta", "Pathanamthitta"),
    d("Thiruvananthapuram", "Thiruvananthapuram"),
    d("Thrissur", "Thrissur"),
    d("Wayanad", "Wayanad"),
];

const WEST_BENGAL: &[District] = &[
    d("Nadia", "Nadia"),
    d("Kolkata", "Kolkata"),
    d("Darjeeling", "Darjiling"),
    d("Howrah", "Haora"),
    d("Hooghly", "Hugli"),
];

pub const STATES: &[&str] = &["Tamil Nadu", "Kerala", "West Bengal"];

pub fn districts(state: &str) -> Option<&'static [District]> {
    match state {
        "Tamil Nadu" => Some(TAMIL_NADU),
        "Kerala" => Some(KERALA),
        "West Bengal" => Some(WEST_BENGAL),
        _ => None,
    }
}

pub fn resolve(state: &str, district: &str) -> Result<&'static District> {
    let list = districts(state).ok_or_else(|| Error::UnknownState(state.to_string()))?;
    list.iter()
        .find(|d| d.display == district)
        .ok_or_else(|| Error::UnknownDistrict {
            state: state.to_string(),
            district: district.to_string(),
        })
}
