//! Field whitelists for each filterable collection.

use super::{FieldSet, Filter, Sort};

macro_rules! field_set {
    ($(#[$meta:meta])* $marker:ident, $alias:ident<$kind:ident>, $name:literal, [$(($logical:literal, $wire:literal)),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $marker;

        impl FieldSet for $marker {
            const NAME: &'static str = $name;
            const FIELDS: &'static [(&'static str, &'static str)] = &[$(($logical, $wire)),+];
        }

        #[doc = concat!("`", $name, "` over [`", stringify!($marker), "`].")]
        pub type $alias = $kind<$marker>;
    };
}

// Advertiser collections

field_set!(
    /// Filterable fields of an advertiser's program list.
    AdvertiserProgramFilterFields, AdvertiserProgramFilter<Filter>, "AdvertiserProgramFilter",
    [("query", "query"), ("status", "status"), ("category", "category_id")]
);
field_set!(
    /// Sortable fields of an advertiser's program list.
    AdvertiserProgramSortFields, AdvertiserProgramSort<Sort>, "AdvertiserProgramSort",
    [("name", "name"), ("date", "created_at")]
);

field_set!(
    /// Filterable fields of an advertiser's commission list.
    AdvertiserCommissionFilterFields, AdvertiserCommissionFilter<Filter>, "AdvertiserCommissionFilter",
    [
        ("query", "query"),
        ("status", "status"),
        ("month", "month"),
        ("affiliate", "affiliate_id"),
        ("source", "source"),
    ]
);
field_set!(
    /// Sortable fields of an advertiser's commission list.
    AdvertiserCommissionSortFields, AdvertiserCommissionSort<Sort>, "AdvertiserCommissionSort",
    [("date", "created_at"), ("amount", "amount"), ("status", "status")]
);

field_set!(
    /// Filterable fields of an advertiser's affiliate list.
    AdvertiserAffiliateFilterFields, AdvertiserAffiliateFilter<Filter>, "AdvertiserAffiliateFilter",
    [("query", "query"), ("status", "status"), ("recruited", "affiliate_is_recruited")]
);
field_set!(
    /// Sortable fields of an advertiser's affiliate list.
    AdvertiserAffiliateSortFields, AdvertiserAffiliateSort<Sort>, "AdvertiserAffiliateSort",
    [
        ("username", "username"),
        ("clicks", "clicks"),
        ("conversions", "conversions_count"),
        ("saleAmounts", "sale_amounts"),
        ("commissionAmounts", "commission_amounts"),
        ("cps", "cps"),
        ("customConditions", "custom_conditions"),
    ]
);

// Affiliate collections

field_set!(
    /// Filterable fields of an affiliate's program list.
    AffiliateProgramFilterFields, AffiliateProgramFilter<Filter>, "AffiliateProgramFilter",
    [
        ("query", "query"),
        ("category", "category_id"),
        ("relation", "relation"),
        ("country", "country"),
    ]
);
field_set!(
    /// Sortable fields of an affiliate's program list.
    AffiliateProgramSortFields, AffiliateProgramSort<Sort>, "AffiliateProgramSort",
    [("name", "name"), ("launchDate", "launched_at"), ("approvalRate", "approval_rate")]
);

field_set!(
    /// Filterable fields of an affiliate's commission list.
    AffiliateCommissionFilterFields, AffiliateCommissionFilter<Filter>, "AffiliateCommissionFilter",
    [
        ("query", "query"),
        ("status", "status"),
        ("month", "month"),
        ("program", "program_id"),
    ]
);
field_set!(
    /// Sortable fields of an affiliate's commission list.
    AffiliateCommissionSortFields, AffiliateCommissionSort<Sort>, "AffiliateCommissionSort",
    [("date", "created_at"), ("amount", "amount"), ("status", "status")]
);

field_set!(
    /// Filterable fields of an affiliate's product feed list.
    AffiliateProductFeedFilterFields, AffiliateProductFeedFilter<Filter>, "AffiliateProductFeedFilter",
    [("query", "query"), ("program", "program_id")]
);
field_set!(
    /// Sortable fields of an affiliate's product feed list.
    AffiliateProductFeedSortFields, AffiliateProductFeedSort<Sort>, "AffiliateProductFeedSort",
    [("name", "name"), ("updated", "updated_at"), ("products", "products_count")]
);

field_set!(
    /// Filterable fields of a product feed's product list.
    AffiliateProductFilterFields, AffiliateProductFilter<Filter>, "AffiliateProductFilter",
    [
        ("query", "query"),
        ("brand", "brand"),
        ("category", "category"),
        ("minPrice", "price_min"),
        ("maxPrice", "price_max"),
    ]
);
field_set!(
    /// Sortable fields of a product feed's product list.
    AffiliateProductSortFields, AffiliateProductSort<Sort>, "AffiliateProductSort",
    [("price", "price"), ("title", "title"), ("date", "updated_at")]
);

field_set!(
    /// Filterable fields of an affiliate's banner list.
    AffiliateBannerFilterFields, AffiliateBannerFilter<Filter>, "AffiliateBannerFilter",
    [
        ("query", "query"),
        ("program", "program_id"),
        ("dimensions", "dimensions"),
        ("type", "banner_type"),
    ]
);
field_set!(
    /// Sortable fields of an affiliate's banner list.
    AffiliateBannerSortFields, AffiliateBannerSort<Sort>, "AffiliateBannerSort",
    [("date", "created_at"), ("name", "title")]
);

field_set!(
    /// Filterable fields of an affiliate's advertiser promotion list.
    AffiliateAdvertiserPromotionFilterFields, AffiliateAdvertiserPromotionFilter<Filter>,
    "AffiliateAdvertiserPromotionFilter",
    [("query", "query"), ("program", "program_id"), ("active", "active")]
);
field_set!(
    /// Sortable fields of an affiliate's advertiser promotion list.
    AffiliateAdvertiserPromotionSortFields, AffiliateAdvertiserPromotionSort<Sort>,
    "AffiliateAdvertiserPromotionSort",
    [("startDate", "promotion_start"), ("endDate", "promotion_end"), ("name", "name")]
);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique_names<F: FieldSet>() {
        for (index, (logical, wire)) in F::FIELDS.iter().enumerate() {
            for (other_logical, other_wire) in &F::FIELDS[index + 1..] {
                assert_ne!(logical, other_logical, "{} repeats {logical}", F::NAME);
                assert_ne!(wire, other_wire, "{} repeats wire {wire}", F::NAME);
            }
        }
    }

    #[test]
    fn test_whitelists_have_no_duplicate_names() {
        assert_unique_names::<AdvertiserProgramFilterFields>();
        assert_unique_names::<AdvertiserProgramSortFields>();
        assert_unique_names::<AdvertiserCommissionFilterFields>();
        assert_unique_names::<AdvertiserCommissionSortFields>();
        assert_unique_names::<AdvertiserAffiliateFilterFields>();
        assert_unique_names::<AdvertiserAffiliateSortFields>();
        assert_unique_names::<AffiliateProgramFilterFields>();
        assert_unique_names::<AffiliateProgramSortFields>();
        assert_unique_names::<AffiliateCommissionFilterFields>();
        assert_unique_names::<AffiliateCommissionSortFields>();
        assert_unique_names::<AffiliateProductFeedFilterFields>();
        assert_unique_names::<AffiliateProductFeedSortFields>();
        assert_unique_names::<AffiliateProductFilterFields>();
        assert_unique_names::<AffiliateProductSortFields>();
        assert_unique_names::<AffiliateBannerFilterFields>();
        assert_unique_names::<AffiliateBannerSortFields>();
        assert_unique_names::<AffiliateAdvertiserPromotionFilterFields>();
        assert_unique_names::<AffiliateAdvertiserPromotionSortFields>();
    }

    #[test]
    fn test_recruited_maps_to_affiliate_is_recruited() {
        assert_eq!(
            AdvertiserAffiliateFilterFields::wire_name("recruited"),
            Ok("affiliate_is_recruited")
        );
    }

    #[test]
    fn test_price_range_filter() {
        let filter = AffiliateProductFilter::from_pairs([("minPrice", "10"), ("maxPrice", "99.90")])
            .unwrap();
        let params = filter.to_params();
        assert_eq!(params["price_min"], "10");
        assert_eq!(params["price_max"], "99.90");
    }
}
