//! Canonical schema catalog
//!
//! Every canonical key the synonym table can produce, with a display label,
//! the kind of value it holds and the unit numeric values are expressed in.
//! Numbered keys follow the property-report field order; the unnumbered keys
//! are supplementary MLS attributes.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Kind of value a canonical field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    Text,
    Number,
    Currency,
    Percentage,
    Boolean,
    Date,
    List,
}

/// Unit a numeric canonical field is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Usd,
    UsdPerYear,
    UsdPerMonth,
    UsdPerSquareFoot,
    SquareFeet,
    Acres,
    Miles,
    Feet,
    Percent,
    Years,
    Decibels,
    Pounds,
    Mbps,
}

/// One entry of the canonical schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanonicalField {
    pub key: &'static str,
    pub label: &'static str,
    pub semantic_type: SemanticType,
    pub unit: Option<Unit>,
}

impl CanonicalField {
    /// True for fields whose values are numeric quantities
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.semantic_type,
            SemanticType::Number | SemanticType::Currency | SemanticType::Percentage
        )
    }
}

const fn field(
    key: &'static str,
    label: &'static str,
    semantic_type: SemanticType,
    unit: Option<Unit>,
) -> CanonicalField {
    CanonicalField {
        key,
        label,
        semantic_type,
        unit,
    }
}

/// The canonical schema, in report order
pub static CATALOG: &[CanonicalField] = &[
    field("1_full_address", "Full Address", SemanticType::Text, None),
    field("2_mls_primary", "MLS Primary", SemanticType::Text, None),
    field("3_mls_secondary", "MLS Secondary", SemanticType::Text, None),
    field("4_listing_status", "Listing Status", SemanticType::Text, None),
    field("5_listing_date", "Listing Date", SemanticType::Date, None),
    field("6_neighborhood", "Neighborhood", SemanticType::Text, None),
    field("7_county", "County", SemanticType::Text, None),
    field("8_zip_code", "Zip Code", SemanticType::Text, None),
    field("9_parcel_id", "Parcel ID", SemanticType::Text, None),
    field("10_listing_price", "Listing Price", SemanticType::Currency, Some(Unit::Usd)),
    field("11_price_per_sqft", "Price Per SqFt", SemanticType::Currency, Some(Unit::UsdPerSquareFoot)),
    field("12_market_value_estimate", "Market Value Estimate", SemanticType::Currency, Some(Unit::Usd)),
    field("13_last_sale_date", "Last Sale Date", SemanticType::Date, None),
    field("14_last_sale_price", "Last Sale Price", SemanticType::Currency, Some(Unit::Usd)),
    field("15_assessed_value", "Assessed Value", SemanticType::Currency, Some(Unit::Usd)),
    field("16_redfin_estimate", "Redfin Estimate", SemanticType::Currency, Some(Unit::Usd)),
    field("17_bedrooms", "Bedrooms", SemanticType::Number, None),
    field("18_full_bathrooms", "Full Bathrooms", SemanticType::Number, None),
    field("19_half_bathrooms", "Half Bathrooms", SemanticType::Number, None),
    field("20_total_bathrooms", "Total Bathrooms", SemanticType::Number, None),
    field("21_living_sqft", "Living SqFt", SemanticType::Number, Some(Unit::SquareFeet)),
    field("22_total_sqft_under_roof", "Total SqFt Under Roof", SemanticType::Number, Some(Unit::SquareFeet)),
    field("23_lot_size_sqft", "Lot Size SqFt", SemanticType::Number, Some(Unit::SquareFeet)),
    field("24_lot_size_acres", "Lot Size Acres", SemanticType::Number, Some(Unit::Acres)),
    field("25_year_built", "Year Built", SemanticType::Number, None),
    field("26_property_type", "Property Type", SemanticType::Text, None),
    field("27_stories", "Stories", SemanticType::Number, None),
    field("28_garage_spaces", "Garage Spaces", SemanticType::Number, None),
    field("29_parking_total", "Parking Total", SemanticType::Number, None),
    field("30_hoa_yn", "HOA Y/N", SemanticType::Boolean, None),
    field("31_hoa_fee_annual", "HOA Fee Annual", SemanticType::Currency, Some(Unit::UsdPerYear)),
    field("32_hoa_name", "HOA Name", SemanticType::Text, None),
    field("33_hoa_includes", "HOA Includes", SemanticType::List, None),
    field("34_ownership_type", "Ownership Type", SemanticType::Text, None),
    field("35_annual_taxes", "Annual Taxes", SemanticType::Currency, Some(Unit::UsdPerYear)),
    field("36_tax_year", "Tax Year", SemanticType::Number, None),
    field("37_property_tax_rate", "Property Tax Rate", SemanticType::Percentage, Some(Unit::Percent)),
    field("38_tax_exemptions", "Tax Exemptions", SemanticType::List, None),
    field("39_roof_type", "Roof Type", SemanticType::Text, None),
    field("40_roof_age_est", "Roof Age Est.", SemanticType::Number, Some(Unit::Years)),
    field("41_exterior_material", "Exterior Material", SemanticType::Text, None),
    field("42_foundation", "Foundation", SemanticType::Text, None),
    field("43_water_heater_type", "Water Heater Type", SemanticType::Text, None),
    field("44_garage_type", "Garage Type", SemanticType::Text, None),
    field("45_hvac_type", "HVAC Type", SemanticType::Text, None),
    field("46_hvac_age", "HVAC Age", SemanticType::Number, Some(Unit::Years)),
    field("47_laundry_type", "Laundry Type", SemanticType::Text, None),
    field("48_interior_condition", "Interior Condition", SemanticType::Text, None),
    field("49_flooring_type", "Flooring Type", SemanticType::List, None),
    field("50_kitchen_features", "Kitchen Features", SemanticType::List, None),
    field("51_appliances_included", "Appliances Included", SemanticType::List, None),
    field("52_fireplace_yn", "Fireplace Y/N", SemanticType::Boolean, None),
    field("53_fireplace_count", "Fireplace Count", SemanticType::Number, None),
    field("54_pool_yn", "Pool Y/N", SemanticType::Boolean, None),
    field("55_pool_type", "Pool Type", SemanticType::List, None),
    field("56_deck_patio", "Deck Patio", SemanticType::Text, None),
    field("57_fence", "Fence", SemanticType::Text, None),
    field("58_landscaping", "Landscaping", SemanticType::Text, None),
    field("59_recent_renovations", "Recent Renovations", SemanticType::Text, None),
    field("60_permit_history_roof", "Permit History Roof", SemanticType::Text, None),
    field("61_permit_history_hvac", "Permit History HVAC", SemanticType::Text, None),
    field("62_permit_history_other", "Permit History Other", SemanticType::Text, None),
    field("63_school_district", "School District", SemanticType::Text, None),
    field("64_elevation_feet", "Elevation Feet", SemanticType::Number, Some(Unit::Feet)),
    field("65_elementary_school", "Elementary School", SemanticType::Text, None),
    field("66_elementary_rating", "Elementary Rating", SemanticType::Number, None),
    field("67_elementary_distance_mi", "Elementary Distance (mi)", SemanticType::Number, Some(Unit::Miles)),
    field("68_middle_school", "Middle School", SemanticType::Text, None),
    field("69_middle_rating", "Middle Rating", SemanticType::Number, None),
    field("70_middle_distance_mi", "Middle Distance (mi)", SemanticType::Number, Some(Unit::Miles)),
    field("71_high_school", "High School", SemanticType::Text, None),
    field("72_high_rating", "High Rating", SemanticType::Number, None),
    field("73_high_distance_mi", "High Distance (mi)", SemanticType::Number, Some(Unit::Miles)),
    field("74_walk_score", "Walk Score", SemanticType::Number, None),
    field("75_transit_score", "Transit Score", SemanticType::Number, None),
    field("76_bike_score", "Bike Score", SemanticType::Number, None),
    field("77_safety_score", "Safety Score", SemanticType::Number, None),
    field("78_noise_level", "Noise Level", SemanticType::Text, None),
    field("79_traffic_level", "Traffic Level", SemanticType::Text, None),
    field("80_walkability_description", "Walkability Description", SemanticType::Text, None),
    field("81_public_transit_access", "Public Transit Access", SemanticType::Text, None),
    field("82_commute_to_city_center", "Commute To City Center", SemanticType::Text, None),
    field("83_distance_grocery_mi", "Distance Grocery (mi)", SemanticType::Number, Some(Unit::Miles)),
    field("84_distance_hospital_mi", "Distance Hospital (mi)", SemanticType::Number, Some(Unit::Miles)),
    field("85_distance_airport_mi", "Distance Airport (mi)", SemanticType::Number, Some(Unit::Miles)),
    field("86_distance_park_mi", "Distance Park (mi)", SemanticType::Number, Some(Unit::Miles)),
    field("87_distance_beach_mi", "Distance Beach (mi)", SemanticType::Number, Some(Unit::Miles)),
    field("88_violent_crime_index", "Violent Crime Index", SemanticType::Number, None),
    field("89_property_crime_index", "Property Crime Index", SemanticType::Number, None),
    field("90_neighborhood_safety_rating", "Neighborhood Safety Rating", SemanticType::Text, None),
    field("91_median_home_price_neighborhood", "Median Home Price Neighborhood", SemanticType::Currency, Some(Unit::Usd)),
    field("92_price_per_sqft_recent_avg", "Price Per SqFt Recent Avg", SemanticType::Currency, Some(Unit::UsdPerSquareFoot)),
    field("93_price_to_rent_ratio", "Price To Rent Ratio", SemanticType::Number, None),
    field("94_price_vs_median_percent", "Price Vs Median Percent", SemanticType::Percentage, Some(Unit::Percent)),
    field("95_days_on_market_avg", "Days On Market Avg", SemanticType::Number, None),
    field("96_inventory_surplus", "Inventory Surplus", SemanticType::Text, None),
    field("97_insurance_est_annual", "Insurance Est. Annual", SemanticType::Currency, Some(Unit::UsdPerYear)),
    field("98_rental_estimate_monthly", "Rental Estimate Monthly", SemanticType::Currency, Some(Unit::UsdPerMonth)),
    field("99_rental_yield_est", "Rental Yield Est.", SemanticType::Percentage, Some(Unit::Percent)),
    field("100_vacancy_rate_neighborhood", "Vacancy Rate Neighborhood", SemanticType::Percentage, Some(Unit::Percent)),
    field("101_cap_rate_est", "Cap Rate Est.", SemanticType::Percentage, Some(Unit::Percent)),
    field("102_financing_terms", "Financing Terms", SemanticType::Text, None),
    field("103_comparable_sales", "Comparable Sales", SemanticType::List, None),
    field("104_electric_provider", "Electric Provider", SemanticType::Text, None),
    field("105_avg_electric_bill", "Avg Electric Bill", SemanticType::Currency, Some(Unit::UsdPerMonth)),
    field("106_water_provider", "Water Provider", SemanticType::Text, None),
    field("107_avg_water_bill", "Avg Water Bill", SemanticType::Currency, Some(Unit::UsdPerMonth)),
    field("108_sewer_provider", "Sewer Provider", SemanticType::Text, None),
    field("109_natural_gas", "Natural Gas", SemanticType::Text, None),
    field("110_trash_provider", "Trash Provider", SemanticType::Text, None),
    field("111_internet_providers_top3", "Internet Providers (Top 3)", SemanticType::List, None),
    field("112_max_internet_speed", "Max Internet Speed", SemanticType::Number, Some(Unit::Mbps)),
    field("113_fiber_available", "Fiber Available", SemanticType::Boolean, None),
    field("114_cable_tv_provider", "Cable TV Provider", SemanticType::Text, None),
    field("115_cell_coverage_quality", "Cell Coverage Quality", SemanticType::Text, None),
    field("116_emergency_services_distance", "Emergency Services Distance", SemanticType::Number, Some(Unit::Miles)),
    field("117_air_quality_index", "Air Quality Index", SemanticType::Number, None),
    field("118_air_quality_grade", "Air Quality Grade", SemanticType::Text, None),
    field("119_flood_zone", "Flood Zone", SemanticType::Text, None),
    field("120_flood_risk_level", "Flood Risk Level", SemanticType::Text, None),
    field("121_climate_risk", "Climate Risk", SemanticType::Text, None),
    field("122_wildfire_risk", "Wildfire Risk", SemanticType::Text, None),
    field("123_earthquake_risk", "Earthquake Risk", SemanticType::Text, None),
    field("124_hurricane_risk", "Hurricane Risk", SemanticType::Text, None),
    field("125_tornado_risk", "Tornado Risk", SemanticType::Text, None),
    field("126_radon_risk", "Radon Risk", SemanticType::Text, None),
    field("127_superfund_site_nearby", "Superfund Site Nearby", SemanticType::Boolean, None),
    field("128_sea_level_rise_risk", "Sea Level Rise Risk", SemanticType::Text, None),
    field("129_noise_level_db_est", "Noise Level dB Est.", SemanticType::Number, Some(Unit::Decibels)),
    field("130_solar_potential", "Solar Potential", SemanticType::Text, None),
    field("131_view_type", "View Type", SemanticType::Text, None),
    field("132_lot_features", "Lot Features", SemanticType::List, None),
    field("133_ev_charging", "EV Charging", SemanticType::Text, None),
    field("134_smart_home_features", "Smart Home Features", SemanticType::List, None),
    field("135_accessibility_modifications", "Accessibility Modifications", SemanticType::List, None),
    field("136_pet_policy", "Pet Policy", SemanticType::Text, None),
    field("137_age_restrictions", "Age Restrictions", SemanticType::Text, None),
    field("138_special_assessments", "Special Assessments", SemanticType::Text, None),
    field("139_carport_yn", "Carport Y/N", SemanticType::Boolean, None),
    field("140_carport_spaces", "Carport Spaces", SemanticType::Number, None),
    field("141_garage_attached_yn", "Garage Attached Y/N", SemanticType::Boolean, None),
    field("142_parking_features", "Parking Features", SemanticType::List, None),
    field("143_assigned_parking_spaces", "Assigned Parking Spaces", SemanticType::Number, None),
    field("144_floor_number", "Floor Number", SemanticType::Number, None),
    field("145_building_total_floors", "Building Total Floors", SemanticType::Number, None),
    field("146_building_name_number", "Building Name Number", SemanticType::Text, None),
    field("147_building_elevator_yn", "Building Elevator Y/N", SemanticType::Boolean, None),
    field("148_floors_in_unit", "Floors In Unit", SemanticType::Number, None),
    field("149_subdivision_name", "Subdivision Name", SemanticType::Text, None),
    field("150_legal_description", "Legal Description", SemanticType::Text, None),
    field("151_homestead_yn", "Homestead Y/N", SemanticType::Boolean, None),
    field("152_cdd_yn", "CDD Y/N", SemanticType::Boolean, None),
    field("153_annual_cdd_fee", "Annual CDD Fee", SemanticType::Currency, Some(Unit::UsdPerYear)),
    field("154_front_exposure", "Front Exposure", SemanticType::Text, None),
    field("155_water_frontage_yn", "Water Frontage Y/N", SemanticType::Boolean, None),
    field("156_waterfront_feet", "Waterfront Feet", SemanticType::Number, Some(Unit::Feet)),
    field("157_water_access_yn", "Water Access Y/N", SemanticType::Boolean, None),
    field("158_water_view_yn", "Water View Y/N", SemanticType::Boolean, None),
    field("159_water_body_name", "Water Body Name", SemanticType::Text, None),
    field("160_can_be_leased_yn", "Can Be Leased Y/N", SemanticType::Boolean, None),
    field("161_minimum_lease_period", "Minimum Lease Period", SemanticType::Text, None),
    field("162_lease_restrictions_yn", "Lease Restrictions Y/N", SemanticType::Boolean, None),
    field("163_pet_size_limit", "Pet Size Limit", SemanticType::Text, None),
    field("164_max_pet_weight", "Max Pet Weight", SemanticType::Number, Some(Unit::Pounds)),
    field("165_association_approval_yn", "Association Approval Y/N", SemanticType::Boolean, None),
    field("166_community_features", "Community Features", SemanticType::List, None),
    field("167_interior_features", "Interior Features", SemanticType::List, None),
    field("168_exterior_features", "Exterior Features", SemanticType::List, None),
    field("hoa_payment_schedule", "HOA Payment Schedule", SemanticType::Text, None),
    field("flood_zone_date", "Flood Zone Date", SemanticType::Date, None),
    field("flood_zone_panel", "Flood Zone Panel", SemanticType::Text, None),
    field("city", "City", SemanticType::Text, None),
    field("state", "State", SemanticType::Text, None),
    field("section_township_range", "Section Township Range", SemanticType::Text, None),
    field("zoning", "Zoning", SemanticType::Text, None),
    field("future_land_use", "Future Land Use", SemanticType::Text, None),
    field("water_extras", "Water Extras", SemanticType::Text, None),
    field("additional_water_info", "Additional Water Info", SemanticType::Text, None),
    field("pet_restrictions", "Pet Restrictions", SemanticType::Text, None),
    field("approval_process", "Approval Process", SemanticType::Text, None),
    field("years_ownership_before_lease", "Years Ownership Before Lease", SemanticType::Number, Some(Unit::Years)),
    field("new_construction_yn", "New Construction Y/N", SemanticType::Boolean, None),
    field("home_warranty_yn", "Home Warranty Y/N", SemanticType::Boolean, None),
    field("utilities", "Utilities", SemanticType::List, None),
    field("security_features", "Security Features", SemanticType::List, None),
    field("window_features", "Window Features", SemanticType::List, None),
    field("furnishings", "Furnishings", SemanticType::Text, None),
    field("road_surface", "Road Surface", SemanticType::Text, None),
    field("special_sale_type", "Special Sale Type", SemanticType::Text, None),
    field("max_lease_times_per_year", "Max Lease Times Per Year", SemanticType::Number, None),
];

static CATALOG_INDEX: Lazy<HashMap<&'static str, &'static CanonicalField>> =
    Lazy::new(|| CATALOG.iter().map(|f| (f.key, f)).collect());

/// Catalog entry for a canonical key; `None` for ad-hoc keys
pub fn lookup(key: &str) -> Option<&'static CanonicalField> {
    CATALOG_INDEX.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::synonyms::SYNONYMS;
    use std::collections::HashSet;

    #[test]
    fn test_every_synonym_target_is_cataloged() {
        for (raw, canonical) in SYNONYMS {
            assert!(
                lookup(canonical).is_some(),
                "synonym '{raw}' targets uncataloged key '{canonical}'"
            );
        }
    }

    #[test]
    fn test_catalog_keys_unique() {
        let keys: HashSet<_> = CATALOG.iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), CATALOG.len());
    }

    #[test]
    fn test_resolver_inputs_are_numeric() {
        for key in ["35_annual_taxes", "15_assessed_value", "37_property_tax_rate"] {
            let entry = lookup(key).unwrap();
            assert!(entry.is_numeric(), "{key} should be numeric");
        }
        assert_eq!(lookup("37_property_tax_rate").unwrap().unit, Some(Unit::Percent));
        assert_eq!(lookup("31_hoa_fee_annual").unwrap().unit, Some(Unit::UsdPerYear));
    }

    #[test]
    fn test_pool_fields_typed() {
        assert_eq!(lookup("54_pool_yn").unwrap().semantic_type, SemanticType::Boolean);
        assert_eq!(lookup("55_pool_type").unwrap().semantic_type, SemanticType::List);
        assert_eq!(lookup("54_pool_yn").unwrap().label, "Pool Y/N");
    }

    #[test]
    fn test_ad_hoc_key_not_cataloged() {
        assert!(lookup("mystery_field").is_none());
    }
}
