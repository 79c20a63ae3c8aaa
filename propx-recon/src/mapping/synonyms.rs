//! Synonym Table
//!
//! Static many-to-one mapping from provider field names to canonical schema
//! keys, plus the two-phase lookup over it:
//! 1. **Exact** - raw key equals a synonym verbatim
//! 2. **Normalized** - raw key equals a synonym after both are stripped to
//!    lowercase ASCII alphanumerics
//!
//! The table is maintained by hand and never extended at runtime. Both
//! lookup indexes are built once per process.
//!
//! # Determinism
//! Several synonyms share a normalized form (`"Floor"` / `"Floor #"`). The
//! normalized index keeps the entry that appears first in [`SYNONYMS`], so a
//! lookup never depends on hash iteration order.

use crate::types::MatchKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::trace;

/// Raw field name → canonical key, in precedence order
pub static SYNONYMS: &[(&str, &str)] = &[
    // Address & Identity
    ("Address", "1_full_address"),
    ("Full Address", "1_full_address"),
    ("Property Address", "1_full_address"),
    ("Street Address", "1_full_address"),
    ("Location", "1_full_address"),
    ("MLS#", "2_mls_primary"),
    ("MLS Number", "2_mls_primary"),
    ("MLS", "2_mls_primary"),
    ("Listing ID", "2_mls_primary"),
    ("List Number", "2_mls_primary"),
    ("Secondary MLS", "3_mls_secondary"),
    ("Other MLS", "3_mls_secondary"),
    ("MLS Secondary", "3_mls_secondary"),
    ("Cross MLS", "3_mls_secondary"),
    ("IDX", "3_mls_secondary"),
    ("Status", "4_listing_status"),
    ("Listing Status", "4_listing_status"),
    ("Property Status", "4_listing_status"),
    ("Listing Type", "4_listing_status"),
    ("List Date", "5_listing_date"),
    ("Original List Date", "5_listing_date"),
    ("Date Listed", "5_listing_date"),
    ("On Market Date", "5_listing_date"),
    ("Neighborhood", "6_neighborhood"),
    ("Area", "6_neighborhood"),
    ("Location Area", "6_neighborhood"),
    ("County", "7_county"),
    ("Zip", "8_zip_code"),
    ("Zip Code", "8_zip_code"),
    ("ZIP", "8_zip_code"),
    ("Postal Code", "8_zip_code"),
    ("Tax ID", "9_parcel_id"),
    ("Parcel ID", "9_parcel_id"),
    ("Parcel Number", "9_parcel_id"),
    ("Alt Key/Folio #", "9_parcel_id"),
    ("Folio Number", "9_parcel_id"),
    ("APN", "9_parcel_id"),

    // Pricing & Value
    ("List Price", "10_listing_price"),
    ("Listing Price", "10_listing_price"),
    ("Current Price", "10_listing_price"),
    ("Price", "10_listing_price"),
    ("Asking Price", "10_listing_price"),
    ("Original Price", "10_listing_price"),
    ("LP/SqFt", "11_price_per_sqft"),
    ("Price/SqFt", "11_price_per_sqft"),
    ("$/SqFt", "11_price_per_sqft"),
    ("Price Per Sq Ft", "11_price_per_sqft"),
    ("Cost Per Sq Ft", "11_price_per_sqft"),
    ("Zestimate", "12_market_value_estimate"),
    ("Estimated Value", "12_market_value_estimate"),
    ("Market Value", "12_market_value_estimate"),
    ("Appraised Value", "12_market_value_estimate"),
    ("Prior Sale Date", "13_last_sale_date"),
    ("Last Sale Date", "13_last_sale_date"),
    ("Previous Sale Date", "13_last_sale_date"),
    ("Sold Date", "13_last_sale_date"),
    ("Close Date", "13_last_sale_date"),
    ("Prior Sale Price", "14_last_sale_price"),
    ("Last Sale Price", "14_last_sale_price"),
    ("Previous Sale Price", "14_last_sale_price"),
    ("Sold Price", "14_last_sale_price"),
    ("Assessed Value", "15_assessed_value"),
    ("Tax Assessed Value", "15_assessed_value"),
    ("Just Value", "15_assessed_value"),
    ("Total Assessed Value", "15_assessed_value"),
    ("Redfin Estimate", "16_redfin_estimate"),

    // Property Basics
    ("Beds", "17_bedrooms"),
    ("Bedrooms", "17_bedrooms"),
    ("BR", "17_bedrooms"),
    ("Bedrooms Total", "17_bedrooms"),
    ("Total Bedrooms", "17_bedrooms"),
    ("Bed", "17_bedrooms"),
    ("Full Baths", "18_full_bathrooms"),
    ("Full Bathrooms", "18_full_bathrooms"),
    ("Full Bath", "18_full_bathrooms"),
    ("Half Baths", "19_half_bathrooms"),
    ("Half Bathrooms", "19_half_bathrooms"),
    ("Half Bath", "19_half_bathrooms"),
    ("Partial Baths", "19_half_bathrooms"),
    ("Baths", "20_total_bathrooms"),
    ("Total Baths", "20_total_bathrooms"),
    ("Bathrooms Total", "20_total_bathrooms"),
    ("BA", "20_total_bathrooms"),
    ("Bathrooms", "20_total_bathrooms"),
    ("Heated Area", "21_living_sqft"),
    ("Living Area", "21_living_sqft"),
    ("Living SqFt", "21_living_sqft"),
    ("Heated SqFt", "21_living_sqft"),
    ("Interior SqFt", "21_living_sqft"),
    ("Sqft", "21_living_sqft"),
    ("Square Feet", "21_living_sqft"),
    ("Living Square Feet", "21_living_sqft"),
    ("Above Grade Finished Area", "21_living_sqft"),
    ("Total Area", "22_total_sqft_under_roof"),
    ("Total SqFt", "22_total_sqft_under_roof"),
    ("Building Area Total", "22_total_sqft_under_roof"),
    ("Under Roof", "22_total_sqft_under_roof"),
    ("Total Building Area", "22_total_sqft_under_roof"),
    ("Gross Area", "22_total_sqft_under_roof"),
    ("Lot Size", "23_lot_size_sqft"),
    ("Lot SqFt", "23_lot_size_sqft"),
    ("Lot Square Feet", "23_lot_size_sqft"),
    ("Land Area", "23_lot_size_sqft"),
    ("Lot Size Acres", "24_lot_size_acres"),
    ("Lot Acres", "24_lot_size_acres"),
    ("Total Acreage", "24_lot_size_acres"),
    ("Acres", "24_lot_size_acres"),
    ("Land Acres", "24_lot_size_acres"),
    ("Year Built", "25_year_built"),
    ("Built", "25_year_built"),
    ("Year Constructed", "25_year_built"),
    ("Construction Year", "25_year_built"),
    ("Property Style", "26_property_type"),
    ("Property Type", "26_property_type"),
    ("Type", "26_property_type"),
    ("Property Sub Type", "26_property_type"),
    ("Sub Type", "26_property_type"),
    ("Style", "26_property_type"),
    ("Building Type", "26_property_type"),
    ("Stories", "27_stories"),
    ("Levels", "27_stories"),
    ("Number of Stories", "27_stories"),
    ("# Stories", "27_stories"),
    ("Garage", "28_garage_spaces"),
    ("Garage Spaces", "28_garage_spaces"),
    ("Spcs", "28_garage_spaces"),
    ("Garage Size", "28_garage_spaces"),
    ("# of Garages", "28_garage_spaces"),
    ("Parking Spaces", "29_parking_total"),
    ("Total Parking", "29_parking_total"),
    ("Parking", "29_parking_total"),
    ("Parking Total Spaces", "29_parking_total"),

    // HOA & Taxes
    ("HOA / Comm Assn", "30_hoa_yn"),
    ("HOA", "30_hoa_yn"),
    ("HOA Y/N", "30_hoa_yn"),
    ("Association", "30_hoa_yn"),
    ("Community Association", "30_hoa_yn"),
    ("HOA Fee", "31_hoa_fee_annual"),
    ("Monthly HOA Amount", "31_hoa_fee_annual"),
    ("HOA Monthly", "31_hoa_fee_annual"),
    ("HOA Annual", "31_hoa_fee_annual"),
    ("Total Annual Assoc Fees", "31_hoa_fee_annual"),
    ("Average Monthly Fees", "31_hoa_fee_annual"),
    ("Association Fee", "31_hoa_fee_annual"),
    ("Condo Fee", "31_hoa_fee_annual"),
    ("Maintenance Fee", "31_hoa_fee_annual"),
    ("HOA Name", "32_hoa_name"),
    ("Association Name", "32_hoa_name"),
    ("Master Assn/Name", "32_hoa_name"),
    ("HOA Company", "32_hoa_name"),
    ("Fee Includes", "33_hoa_includes"),
    ("HOA Includes", "33_hoa_includes"),
    ("Association Fee Includes", "33_hoa_includes"),
    ("Amenities Included", "33_hoa_includes"),
    ("Ownership", "34_ownership_type"),
    ("Ownership Type", "34_ownership_type"),
    ("Fee Simple", "34_ownership_type"),
    ("Taxes", "35_annual_taxes"),
    ("Annual Taxes", "35_annual_taxes"),
    ("Tax Amount", "35_annual_taxes"),
    ("Property Tax", "35_annual_taxes"),
    ("Real Estate Tax", "35_annual_taxes"),
    ("Tax Year", "36_tax_year"),
    ("Property Tax Year", "36_tax_year"),
    ("Mill Rate", "37_property_tax_rate"),
    ("Tax Rate", "37_property_tax_rate"),
    ("Property Tax Rate", "37_property_tax_rate"),
    ("Millage", "37_property_tax_rate"),
    ("Millage Rate", "37_property_tax_rate"),
    ("Tax Exemptions", "38_tax_exemptions"),
    ("Exemptions", "38_tax_exemptions"),
    ("Tax Exemption", "38_tax_exemptions"),
    ("HOA Pmt Sched", "hoa_payment_schedule"),

    // Structure & Systems
    ("Roof", "39_roof_type"),
    ("Roof Type", "39_roof_type"),
    ("Roofing", "39_roof_type"),
    ("Roof Material", "39_roof_type"),
    ("Roof Age", "40_roof_age_est"),
    ("Roof Age Est", "40_roof_age_est"),
    ("Roof Year", "40_roof_age_est"),
    ("Year Roof", "40_roof_age_est"),
    ("Roof Installed", "40_roof_age_est"),
    ("Ext Construction", "41_exterior_material"),
    ("Exterior", "41_exterior_material"),
    ("Exterior Material", "41_exterior_material"),
    ("Construction", "41_exterior_material"),
    ("Construction Materials", "41_exterior_material"),
    ("Exterior Construction", "41_exterior_material"),
    ("Siding", "41_exterior_material"),
    ("Foundation", "42_foundation"),
    ("Foundation Type", "42_foundation"),
    ("Foundation Details", "42_foundation"),
    ("Water Heater", "43_water_heater_type"),
    ("Water Heater Type", "43_water_heater_type"),
    ("Hot Water", "43_water_heater_type"),
    ("Hot Water Heater", "43_water_heater_type"),
    ("Garage Type", "44_garage_type"),
    ("Garage Style", "44_garage_type"),
    ("Garage Description", "44_garage_type"),
    ("A/C", "45_hvac_type"),
    ("Heat/Fuel", "45_hvac_type"),
    ("HVAC", "45_hvac_type"),
    ("Heating", "45_hvac_type"),
    ("Cooling", "45_hvac_type"),
    ("Heating Type", "45_hvac_type"),
    ("Cooling Type", "45_hvac_type"),
    ("Central Air", "45_hvac_type"),
    ("Air Conditioning", "45_hvac_type"),
    ("HVAC Age", "46_hvac_age"),
    ("AC Age", "46_hvac_age"),
    ("Age of HVAC", "46_hvac_age"),
    ("HVAC Year", "46_hvac_age"),
    ("Laundry Features", "47_laundry_type"),
    ("Laundry", "47_laundry_type"),
    ("Laundry Room", "47_laundry_type"),
    ("Washer/Dryer", "47_laundry_type"),
    ("Property Condition", "48_interior_condition"),
    ("Interior Condition", "48_interior_condition"),
    ("Condition", "48_interior_condition"),
    ("Overall Condition", "48_interior_condition"),

    // Interior Features
    ("Flooring Covering", "49_flooring_type"),
    ("Flooring", "49_flooring_type"),
    ("Floor", "49_flooring_type"),
    ("Floor Covering", "49_flooring_type"),
    ("Floors", "49_flooring_type"),
    ("Kitchen", "50_kitchen_features"),
    ("Kitchen Features", "50_kitchen_features"),
    ("Kitchen Description", "50_kitchen_features"),
    ("Appliances Incl", "51_appliances_included"),
    ("Appliances", "51_appliances_included"),
    ("Appliances Included", "51_appliances_included"),
    ("Equipment", "51_appliances_included"),
    ("Fireplace", "52_fireplace_yn"),
    ("Fireplace Y/N", "52_fireplace_yn"),
    ("Has Fireplace", "52_fireplace_yn"),
    ("Fireplaces", "53_fireplace_count"),
    ("# Fireplaces", "53_fireplace_count"),
    ("Number of Fireplaces", "53_fireplace_count"),
    ("Fireplace Count", "53_fireplace_count"),

    // Exterior Features
    ("Pool", "54_pool_yn"),
    ("Pool Y/N", "54_pool_yn"),
    ("Has Pool", "54_pool_yn"),
    ("Private Pool", "54_pool_yn"),
    ("Pool Type", "55_pool_type"),
    ("Pool Features", "55_pool_type"),
    ("Pool Description", "55_pool_type"),
    ("Deck", "56_deck_patio"),
    ("Patio", "56_deck_patio"),
    ("Deck/Patio", "56_deck_patio"),
    ("Porch", "56_deck_patio"),
    ("Outdoor Living", "56_deck_patio"),
    ("Fence", "57_fence"),
    ("Fencing", "57_fence"),
    ("Fence Type", "57_fence"),
    ("Fenced", "57_fence"),
    ("Landscaping", "58_landscaping"),
    ("Landscape", "58_landscaping"),
    ("Yard", "58_landscaping"),

    // Permits & Renovations
    ("Recent Renovations", "59_recent_renovations"),
    ("Renovations", "59_recent_renovations"),
    ("Updates", "59_recent_renovations"),
    ("Improvements", "59_recent_renovations"),
    ("Recent Updates", "59_recent_renovations"),
    ("Upgrades", "59_recent_renovations"),
    ("Remodeled", "59_recent_renovations"),
    ("Roof Permit", "60_permit_history_roof"),
    ("Permit History Roof", "60_permit_history_roof"),
    ("HVAC Permit", "61_permit_history_hvac"),
    ("Permit History HVAC", "61_permit_history_hvac"),
    ("Other Permits", "62_permit_history_other"),
    ("Building Permits", "62_permit_history_other"),
    ("Permit History", "62_permit_history_other"),

    // Schools
    ("School District", "63_school_district"),
    ("District", "63_school_district"),
    ("School District Name", "63_school_district"),
    ("Elevation", "64_elevation_feet"),
    ("Elevation Feet", "64_elevation_feet"),
    ("Property Elevation", "64_elevation_feet"),
    ("Feet Above Sea Level", "64_elevation_feet"),
    ("Elementary School", "65_elementary_school"),
    ("Elementary", "65_elementary_school"),
    ("Assigned Elementary", "65_elementary_school"),
    ("Elementary Rating", "66_elementary_rating"),
    ("Elementary School Rating", "66_elementary_rating"),
    ("Elementary Distance", "67_elementary_distance_mi"),
    ("Elementary Distance Miles", "67_elementary_distance_mi"),
    ("Middle School", "68_middle_school"),
    ("Middle", "68_middle_school"),
    ("Assigned Middle", "68_middle_school"),
    ("Middle Rating", "69_middle_rating"),
    ("Middle School Rating", "69_middle_rating"),
    ("Middle Distance", "70_middle_distance_mi"),
    ("Middle Distance Miles", "70_middle_distance_mi"),
    ("High School", "71_high_school"),
    ("High", "71_high_school"),
    ("Assigned High", "71_high_school"),
    ("High Rating", "72_high_rating"),
    ("High School Rating", "72_high_rating"),
    ("High Distance", "73_high_distance_mi"),
    ("High Distance Miles", "73_high_distance_mi"),

    // Location Scores
    ("Walk Score", "74_walk_score"),
    ("WalkScore", "74_walk_score"),
    ("Transit Score", "75_transit_score"),
    ("TransitScore", "75_transit_score"),
    ("Bike Score", "76_bike_score"),
    ("BikeScore", "76_bike_score"),
    ("Safety Score", "77_safety_score"),
    ("Safety", "77_safety_score"),
    ("Noise Level", "78_noise_level"),
    ("Noise", "78_noise_level"),
    ("Sound Score", "78_noise_level"),
    ("Traffic Level", "79_traffic_level"),
    ("Traffic", "79_traffic_level"),
    ("Walkability Description", "80_walkability_description"),
    ("Walkability", "80_walkability_description"),
    ("Public Transit Access", "81_public_transit_access"),
    ("Transit Access", "81_public_transit_access"),
    ("Public Transit", "81_public_transit_access"),
    ("Commute to City Center", "82_commute_to_city_center"),
    ("Commute Time", "82_commute_to_city_center"),
    ("Downtown Commute", "82_commute_to_city_center"),

    // Distances & Amenities
    ("Distance to Grocery", "83_distance_grocery_mi"),
    ("Grocery Distance", "83_distance_grocery_mi"),
    ("Nearest Grocery", "83_distance_grocery_mi"),
    ("Distance to Hospital", "84_distance_hospital_mi"),
    ("Hospital Distance", "84_distance_hospital_mi"),
    ("Nearest Hospital", "84_distance_hospital_mi"),
    ("Distance to Airport", "85_distance_airport_mi"),
    ("Airport Distance", "85_distance_airport_mi"),
    ("Nearest Airport", "85_distance_airport_mi"),
    ("Distance to Park", "86_distance_park_mi"),
    ("Park Distance", "86_distance_park_mi"),
    ("Nearest Park", "86_distance_park_mi"),
    ("Distance to Beach", "87_distance_beach_mi"),
    ("Beach Distance", "87_distance_beach_mi"),
    ("Nearest Beach", "87_distance_beach_mi"),
    ("Beach Access", "87_distance_beach_mi"),

    // Safety & Crime
    ("Violent Crime Index", "88_violent_crime_index"),
    ("Violent Crime", "88_violent_crime_index"),
    ("Property Crime Index", "89_property_crime_index"),
    ("Property Crime", "89_property_crime_index"),
    ("Neighborhood Safety Rating", "90_neighborhood_safety_rating"),
    ("Safety Rating", "90_neighborhood_safety_rating"),
    ("Crime Rating", "90_neighborhood_safety_rating"),

    // Market & Investment
    ("Median Home Price", "91_median_home_price_neighborhood"),
    ("Neighborhood Median Price", "91_median_home_price_neighborhood"),
    ("Area Median Price", "91_median_home_price_neighborhood"),
    ("Price Per SqFt Avg", "92_price_per_sqft_recent_avg"),
    ("Average Price Per SqFt", "92_price_per_sqft_recent_avg"),
    ("Area Price Per SqFt", "92_price_per_sqft_recent_avg"),
    ("Price to Rent Ratio", "93_price_to_rent_ratio"),
    ("Price vs Median", "94_price_vs_median_percent"),
    ("ADOM", "95_days_on_market_avg"),
    ("CDOM", "95_days_on_market_avg"),
    ("Days on Market", "95_days_on_market_avg"),
    ("DOM", "95_days_on_market_avg"),
    ("Average Days on Market", "95_days_on_market_avg"),
    ("Market Days", "95_days_on_market_avg"),
    ("Inventory", "96_inventory_surplus"),
    ("Market Inventory", "96_inventory_surplus"),
    ("Insurance Estimate", "97_insurance_est_annual"),
    ("Insurance", "97_insurance_est_annual"),
    ("Annual Insurance", "97_insurance_est_annual"),
    ("Rental Estimate", "98_rental_estimate_monthly"),
    ("Rent Estimate", "98_rental_estimate_monthly"),
    ("Monthly Rent", "98_rental_estimate_monthly"),
    ("Rental Income", "98_rental_estimate_monthly"),
    ("Rental Yield", "99_rental_yield_est"),
    ("Yield", "99_rental_yield_est"),
    ("Vacancy Rate", "100_vacancy_rate_neighborhood"),
    ("Cap Rate", "101_cap_rate_est"),
    ("Capitalization Rate", "101_cap_rate_est"),
    ("Financing Terms", "102_financing_terms"),
    ("Financing", "102_financing_terms"),
    ("Loan Terms", "102_financing_terms"),
    ("Comparable Sales", "103_comparable_sales"),
    ("Comps", "103_comparable_sales"),
    ("Recent Sales", "103_comparable_sales"),

    // Utilities & Connectivity
    ("Electric Provider", "104_electric_provider"),
    ("Electric Company", "104_electric_provider"),
    ("Power Company", "104_electric_provider"),
    ("Electric", "104_electric_provider"),
    ("Avg Electric Bill", "105_avg_electric_bill"),
    ("Electric Bill", "105_avg_electric_bill"),
    ("Average Electric", "105_avg_electric_bill"),
    ("Water Provider", "106_water_provider"),
    ("Water Company", "106_water_provider"),
    ("Water Source", "106_water_provider"),
    ("Water", "106_water_provider"),
    ("Avg Water Bill", "107_avg_water_bill"),
    ("Water Bill", "107_avg_water_bill"),
    ("Average Water", "107_avg_water_bill"),
    ("Sewer Provider", "108_sewer_provider"),
    ("Sewer Company", "108_sewer_provider"),
    ("Sewer", "108_sewer_provider"),
    ("Sewer Type", "108_sewer_provider"),
    ("Natural Gas", "109_natural_gas"),
    ("Gas", "109_natural_gas"),
    ("Gas Service", "109_natural_gas"),
    ("Gas Provider", "109_natural_gas"),
    ("Trash Provider", "110_trash_provider"),
    ("Garbage Service", "110_trash_provider"),
    ("Trash Service", "110_trash_provider"),
    ("Waste Management", "110_trash_provider"),
    ("Internet Providers", "111_internet_providers_top3"),
    ("Internet", "111_internet_providers_top3"),
    ("ISP", "111_internet_providers_top3"),
    ("Max Internet Speed", "112_max_internet_speed"),
    ("Internet Speed", "112_max_internet_speed"),
    ("Broadband Speed", "112_max_internet_speed"),
    ("Fiber Available", "113_fiber_available"),
    ("Fiber", "113_fiber_available"),
    ("Fiber Optic", "113_fiber_available"),
    ("Cable TV Provider", "114_cable_tv_provider"),
    ("Cable Provider", "114_cable_tv_provider"),
    ("Cable", "114_cable_tv_provider"),
    ("Cell Coverage Quality", "115_cell_coverage_quality"),
    ("Cell Coverage", "115_cell_coverage_quality"),
    ("Mobile Coverage", "115_cell_coverage_quality"),
    ("Emergency Services Distance", "116_emergency_services_distance"),
    ("Emergency Services", "116_emergency_services_distance"),
    ("Fire Station Distance", "116_emergency_services_distance"),

    // Environment & Risk
    ("Air Quality Index", "117_air_quality_index"),
    ("AQI", "117_air_quality_index"),
    ("Air Quality", "117_air_quality_index"),
    ("Air Quality Grade", "118_air_quality_grade"),
    ("Flood Zone", "119_flood_zone"),
    ("Flood Zone Code", "119_flood_zone"),
    ("FEMA Flood Zone", "119_flood_zone"),
    ("Flood Risk Level", "120_flood_risk_level"),
    ("Flood Risk", "120_flood_risk_level"),
    ("Climate Risk", "121_climate_risk"),
    ("Climate", "121_climate_risk"),
    ("Wildfire Risk", "122_wildfire_risk"),
    ("Fire Risk", "122_wildfire_risk"),
    ("Earthquake Risk", "123_earthquake_risk"),
    ("Seismic Risk", "123_earthquake_risk"),
    ("Hurricane Risk", "124_hurricane_risk"),
    ("Storm Risk", "124_hurricane_risk"),
    ("Tornado Risk", "125_tornado_risk"),
    ("Radon Risk", "126_radon_risk"),
    ("Radon", "126_radon_risk"),
    ("Superfund Site Nearby", "127_superfund_site_nearby"),
    ("Superfund", "127_superfund_site_nearby"),
    ("Environmental Hazard", "127_superfund_site_nearby"),
    ("Sea Level Rise Risk", "128_sea_level_rise_risk"),
    ("Sea Level Rise", "128_sea_level_rise_risk"),
    ("Coastal Flood Risk", "128_sea_level_rise_risk"),
    ("Noise Level dB", "129_noise_level_db_est"),
    ("Noise dB", "129_noise_level_db_est"),
    ("Decibel Level", "129_noise_level_db_est"),
    ("Solar Potential", "130_solar_potential"),
    ("Solar", "130_solar_potential"),
    ("Solar Score", "130_solar_potential"),
    ("Flood Zone Date", "flood_zone_date"),
    ("Flood Zone Panel", "flood_zone_panel"),

    // Location
    ("City", "city"),
    ("State", "state"),
    ("Subdiv", "149_subdivision_name"),
    ("Subdivision", "149_subdivision_name"),
    ("Subdivision Name", "149_subdivision_name"),
    ("SE/TP/RG", "section_township_range"),
    ("Zoning", "zoning"),
    ("Future Land Use", "future_land_use"),

    // Stellar MLS - Parking
    ("Carport", "139_carport_yn"),
    ("Carport Y/N", "139_carport_yn"),
    ("Carport Spcs", "140_carport_spaces"),
    ("Carport Spaces", "140_carport_spaces"),
    ("Attch", "141_garage_attached_yn"),
    ("Garage Attached", "141_garage_attached_yn"),
    ("Attached Garage", "141_garage_attached_yn"),
    ("Garage/Parking Features", "142_parking_features"),
    ("Parking Features", "142_parking_features"),
    ("Assigned Spcs", "143_assigned_parking_spaces"),
    ("Assigned Parking", "143_assigned_parking_spaces"),

    // Stellar MLS - Building
    ("Floor #", "144_floor_number"),
    ("Floor Number", "144_floor_number"),
    ("Unit Floor", "144_floor_number"),
    ("Total # of Floors", "145_building_total_floors"),
    ("Building Floors", "145_building_total_floors"),
    ("Total Floors", "145_building_total_floors"),
    ("Bldg Name/#", "146_building_name_number"),
    ("Building Name", "146_building_name_number"),
    ("Building Number", "146_building_name_number"),
    ("Building Elevator Y/N", "147_building_elevator_yn"),
    ("Elevator", "147_building_elevator_yn"),
    ("Elevator Y/N", "147_building_elevator_yn"),
    ("Floors in Unit/Home", "148_floors_in_unit"),
    ("Floors In Unit", "148_floors_in_unit"),

    // Stellar MLS - Legal
    ("Legal Desc", "150_legal_description"),
    ("Legal Description", "150_legal_description"),
    ("Legal", "150_legal_description"),
    ("Homestead", "151_homestead_yn"),
    ("Homestead Y/N", "151_homestead_yn"),
    ("CDD", "152_cdd_yn"),
    ("CDD Y/N", "152_cdd_yn"),
    ("Annual CDD Fee", "153_annual_cdd_fee"),
    ("CDD Fee", "153_annual_cdd_fee"),
    ("Annual CDD", "153_annual_cdd_fee"),
    ("Front Exposure", "154_front_exposure"),
    ("Exposure", "154_front_exposure"),
    ("Direction Faces", "154_front_exposure"),

    // Stellar MLS - Waterfront
    ("Water Frontage", "155_water_frontage_yn"),
    ("Waterfront", "155_water_frontage_yn"),
    ("Waterfront Y/N", "155_water_frontage_yn"),
    ("Waterfront Ft", "156_waterfront_feet"),
    ("Waterfront Feet", "156_waterfront_feet"),
    ("Water Feet", "156_waterfront_feet"),
    ("Frontage Feet", "156_waterfront_feet"),
    ("Water Access", "157_water_access_yn"),
    ("Water Access Y/N", "157_water_access_yn"),
    ("Water View", "158_water_view_yn"),
    ("Water View Y/N", "158_water_view_yn"),
    ("Water Name", "159_water_body_name"),
    ("Water Body", "159_water_body_name"),
    ("Body of Water", "159_water_body_name"),
    ("Water Extras", "water_extras"),
    ("Addtl Water Info", "additional_water_info"),

    // Stellar MLS - Leasing
    ("Can Property be Leased", "160_can_be_leased_yn"),
    ("Can Be Leased", "160_can_be_leased_yn"),
    ("Lease", "160_can_be_leased_yn"),
    ("Lease Allowed", "160_can_be_leased_yn"),
    ("Minimum Lease Period", "161_minimum_lease_period"),
    ("Minimum Lease", "161_minimum_lease_period"),
    ("Min Lease", "161_minimum_lease_period"),
    ("Lease Period", "161_minimum_lease_period"),
    ("Lease Restrictions", "162_lease_restrictions_yn"),
    ("Pet Size", "163_pet_size_limit"),
    ("Pet Limit", "163_pet_size_limit"),
    ("# of Pets", "163_pet_size_limit"),
    ("Max Pet Wt", "164_max_pet_weight"),
    ("Max Pet Weight", "164_max_pet_weight"),
    ("Pet Weight", "164_max_pet_weight"),
    ("Pet Restrictions", "pet_restrictions"),
    ("Association Approval Required", "165_association_approval_yn"),
    ("Association Approval", "165_association_approval_yn"),
    ("HOA Approval", "165_association_approval_yn"),
    ("Approval Process", "approval_process"),
    ("Years of Ownership Prior to Leasing Required", "years_ownership_before_lease"),

    // Stellar MLS - Features
    ("Community Features", "166_community_features"),
    ("Community Amenities", "166_community_features"),
    ("HOA Amenities", "166_community_features"),
    ("Neighborhood Amenities", "166_community_features"),
    ("Interior Feat", "167_interior_features"),
    ("Interior Features", "167_interior_features"),
    ("Interior", "167_interior_features"),
    ("Interior Amenities", "167_interior_features"),
    ("Ext Features", "168_exterior_features"),
    ("Exterior Features", "168_exterior_features"),
    ("Outdoor Features", "168_exterior_features"),

    // Additional Features
    ("View", "131_view_type"),
    ("View Type", "131_view_type"),
    ("Property View", "131_view_type"),
    ("Views", "131_view_type"),
    ("Lot Features", "132_lot_features"),
    ("Lot Description", "132_lot_features"),
    ("Lot Characteristics", "132_lot_features"),
    ("EV Charging", "133_ev_charging"),
    ("Electric Vehicle Charging", "133_ev_charging"),
    ("EV Charger", "133_ev_charging"),
    ("Electric Car Charging", "133_ev_charging"),
    ("Smart Home Features", "134_smart_home_features"),
    ("Smart Home", "134_smart_home_features"),
    ("Home Automation", "134_smart_home_features"),
    ("Smart Features", "134_smart_home_features"),
    ("Accessibility Features", "135_accessibility_modifications"),
    ("Accessibility", "135_accessibility_modifications"),
    ("Accessibility Modifications", "135_accessibility_modifications"),
    ("ADA Features", "135_accessibility_modifications"),
    ("Handicap Features", "135_accessibility_modifications"),
    ("Pets", "136_pet_policy"),
    ("Pet Policy", "136_pet_policy"),
    ("Pet Rules", "136_pet_policy"),
    ("Pets Allowed", "136_pet_policy"),
    ("Age Restrictions", "137_age_restrictions"),
    ("Age Restriction", "137_age_restrictions"),
    ("Senior Community", "137_age_restrictions"),
    ("55+", "137_age_restrictions"),
    ("55+ Community", "137_age_restrictions"),
    ("Special Assessments", "138_special_assessments"),
    ("Special Assessment", "138_special_assessments"),
    ("Assessments", "138_special_assessments"),

    // Miscellaneous listing attributes
    ("Patio And Porch Features", "56_deck_patio"),
    ("New Construction", "new_construction_yn"),
    ("Home Warranty Y/N", "home_warranty_yn"),
    ("Utilities", "utilities"),
    ("Security Feat", "security_features"),
    ("Window Features", "window_features"),
    ("Furnishings", "furnishings"),
    ("Road Surface Type", "road_surface"),
    ("Special Sale", "special_sale_type"),
    ("Max Times per Yr", "max_lease_times_per_year"),

    // Listing portals
    ("Annual HOA", "31_hoa_fee_annual"),
    ("Property Taxes", "35_annual_taxes"),
    ("Home Value", "12_market_value_estimate"),
    ("Zillow Estimate", "12_market_value_estimate"),
    ("Rent Zestimate", "98_rental_estimate_monthly"),
    ("Zillow Home ID", "3_mls_secondary"),
    ("Realtor Listing ID", "3_mls_secondary"),
    ("Redfin Listing ID", "3_mls_secondary"),
];

/// Strip a field name to lowercase ASCII alphanumerics
///
/// `"Bldg Name/#"` → `"bldgname"`
pub fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Two-phase lookup index over a synonym list
#[derive(Debug)]
pub struct SynonymTable {
    exact: HashMap<&'static str, &'static str>,
    normalized: HashMap<String, &'static str>,
}

impl SynonymTable {
    /// Build both indexes from an ordered synonym list
    ///
    /// For duplicate exact keys and shared normalized forms the first entry wins.
    pub fn build(entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut exact = HashMap::with_capacity(entries.len());
        let mut normalized = HashMap::with_capacity(entries.len());

        for (synonym, canonical) in entries {
            exact.entry(*synonym).or_insert(*canonical);
            let norm = normalize_field_name(synonym);
            if !norm.is_empty() {
                normalized.entry(norm).or_insert(*canonical);
            }
        }

        Self { exact, normalized }
    }

    /// Phase 1: verbatim match
    pub fn lookup_exact(&self, raw_key: &str) -> Option<&'static str> {
        self.exact.get(raw_key).copied()
    }

    /// Phase 2: match on the normalized form
    pub fn lookup_normalized(&self, raw_key: &str) -> Option<&'static str> {
        let norm = normalize_field_name(raw_key);
        if norm.is_empty() {
            return None;
        }
        self.normalized.get(&norm).copied()
    }

    /// Exact match first, normalized match second
    pub fn lookup(&self, raw_key: &str) -> Option<(&'static str, MatchKind)> {
        if let Some(canonical) = self.lookup_exact(raw_key) {
            return Some((canonical, MatchKind::Exact));
        }
        let found = self
            .lookup_normalized(raw_key)
            .map(|canonical| (canonical, MatchKind::Normalized));
        if found.is_none() {
            trace!(raw_key = raw_key, "No synonym for raw key");
        }
        found
    }

    /// Number of distinct exact synonyms
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Distinct canonical keys the table can produce
    pub fn canonical_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        let mut keys: Vec<&'static str> = self.exact.values().copied().collect();
        keys.sort_unstable();
        keys.dedup();
        keys.into_iter()
    }
}

/// Process-wide index over [`SYNONYMS`]
pub static SYNONYM_TABLE: Lazy<SynonymTable> = Lazy::new(|| SynonymTable::build(SYNONYMS));
