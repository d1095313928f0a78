// Page capability contracts
//
// One trait per page/widget of the ContosoAir application. Adapters in
// `crate::pages` implement these against a `Session`; scenario code
// depends only on the traits, so any implementation substitutes.

use async_trait::async_trait;
use flightline_core::Result;

use crate::pages::booking::Itinerary;

/// The landing page: hero content, deal headings, destination cards.
#[async_trait]
pub trait HomePage {
    /// Whether the navbar logo is displayed.
    async fn logo_displayed(&self) -> Result<bool>;

    /// The hero banner title ("Where do you want to go?").
    async fn hero_title(&self) -> Result<String>;

    /// The "Flight deals" section heading.
    async fn deals_heading(&self) -> Result<String>;

    /// The "Recommended for you" section heading.
    async fn recommended_heading(&self) -> Result<String>;

    /// Caption text of a recommended-destination card (e.g. "Hawaii").
    async fn destination_caption(&self, city: &str) -> Result<String>;
}

/// Login and logout, plus the signed-in marker.
#[async_trait]
pub trait LoginPage {
    /// Navigates to the application root.
    async fn open(&self, base_url: &str) -> Result<()>;

    /// Opens the login form and signs in with the given credentials.
    ///
    /// Empty credentials are rejected with `InvalidArgument` before any
    /// element is touched.
    async fn login(&self, username: &str, password: &str) -> Result<()>;

    /// Submits the login form without credentials and returns the alert
    /// message the application displays.
    async fn login_without_credentials(&self) -> Result<String>;

    /// Greeting text shown for the signed-in user (the post-login marker).
    async fn logged_in_user(&self) -> Result<String>;

    async fn logout(&self) -> Result<()>;
}

/// The booking form: route, dates, passengers, trip type.
#[async_trait]
pub trait BookingPage {
    /// Navigates from the navbar to the booking form.
    async fn open(&self) -> Result<()>;

    /// Fills the whole booking form from an [`Itinerary`].
    async fn select_flight_details(&self, itinerary: &Itinerary) -> Result<()>;

    async fn click_one_way(&self) -> Result<()>;
    async fn click_multi_city(&self) -> Result<()>;

    /// Whether the return-date field is currently visible (hidden for
    /// one-way trips). Single check, no wait.
    async fn is_return_date_visible(&self) -> Result<bool>;

    /// Submits the search.
    async fn find_flights(&self) -> Result<()>;
}

/// The "Available flights" departing date/price carousel.
#[async_trait]
pub trait AvailableFlights {
    /// Clicks a departing-flight date card by its visible text
    /// (e.g. "Tuesday Sep 23").
    async fn select_departing_flight_by_date(&self, date_text: &str) -> Result<()>;

    /// All visible departing-flight prices (e.g. "$614"), in document
    /// order.
    async fn departing_flight_prices(&self) -> Result<Vec<String>>;

    /// Whether the card for `date_text` is highlighted as selected.
    /// Single check, no wait.
    async fn is_date_selected(&self, date_text: &str) -> Result<bool>;
}

/// A control in the "View by" / "Filter results" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Price,
    Calendar,
    Schedule,
    Nonstop,
    OneStop,
    TwoPlusStops,
}

impl Filter {
    /// The label text next to the checkbox.
    pub fn label(self) -> &'static str {
        match self {
            Filter::Price => "Price",
            Filter::Calendar => "Calendar",
            Filter::Schedule => "Schedule",
            Filter::Nonstop => "Nonstop",
            Filter::OneStop => "1 stop",
            Filter::TwoPlusStops => "2+ stops",
        }
    }

    pub const ALL: [Filter; 6] = [
        Filter::Price,
        Filter::Calendar,
        Filter::Schedule,
        Filter::Nonstop,
        Filter::OneStop,
        Filter::TwoPlusStops,
    ];
}

/// The "View by" and "Filter results" checkboxes on the booking page.
#[async_trait]
pub trait BookingFilters {
    /// Clicks the filter's checkbox.
    async fn toggle(&self, filter: Filter) -> Result<()>;

    /// Whether the filter's checkbox is selected. Single check, no wait.
    async fn is_selected(&self, filter: Filter) -> Result<bool>;
}

/// The "Flight deals" boxes on the home page.
#[async_trait]
pub trait FlightDeals {
    /// The section heading text.
    async fn deals_heading(&self) -> Result<String>;

    /// Origin and destination of the 1-based `deal` box.
    async fn deal_route(&self, deal: usize) -> Result<(String, String)>;

    /// Purchase-by date of the 1-based `deal` box.
    async fn deal_end_date(&self, deal: usize) -> Result<String>;

    /// Description (including price) of the 1-based `deal` box.
    async fn deal_description(&self, deal: usize) -> Result<String>;
}

/// The "View dates" buttons on the flight-deal boxes.
#[async_trait]
pub trait ViewDates {
    /// Clicks the "View dates" button of the 1-based `deal` box.
    async fn click_view_dates(&self, deal: usize) -> Result<()>;

    /// Title of the page loaded after clicking.
    async fn page_title(&self) -> Result<String>;
}

/// The signed-in user's booked-flight history.
#[async_trait]
pub trait BookedFlights {
    /// Navigates from the navbar to the "My booked flights" page.
    async fn open_my_flights(&self) -> Result<()>;

    /// One text blob per booked-flight listing.
    async fn booked_flights(&self) -> Result<Vec<String>>;

    /// Opens the details of the 0-based `index` listing; out-of-range
    /// indices fail fast with `InvalidArgument`.
    async fn view_flight_details(&self, index: usize) -> Result<()>;

    /// Clicks "Shop for another flight".
    async fn shop_for_another_flight(&self) -> Result<()>;

    /// Clicks "Get another flight".
    async fn get_another_flight(&self) -> Result<()>;
}

/// Which footer column a link lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterSection {
    AboutContoso,
    CustomerService,
    ProductsAndServices,
}

/// A link in the page footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterLink {
    WhoWeAre,
    ContactUs,
    TravelAdvisories,
    CustomerCommitment,
    Feedback,
    PrivacyNotice,
    Careers,
    Legal,
    Newsroom,
    InvestorRelations,
    ContractOfCarriage,
    TarmacDelayPlan,
    SiteMap,
    OptionalServicesAndFees,
    CorporateTravel,
    TravelAgents,
    Cargo,
    GiftCertificates,
    FollowUs,
}

impl FooterLink {
    /// The link's visible text.
    pub fn label(self) -> &'static str {
        match self {
            FooterLink::WhoWeAre => "Who we are",
            FooterLink::ContactUs => "Contact us",
            FooterLink::TravelAdvisories => "Travel advisories",
            FooterLink::CustomerCommitment => "Customer commitment",
            FooterLink::Feedback => "Feedback",
            FooterLink::PrivacyNotice => "Privacy notice",
            FooterLink::Careers => "Careers",
            FooterLink::Legal => "Legal",
            FooterLink::Newsroom => "Newsroom",
            FooterLink::InvestorRelations => "Investor relations",
            FooterLink::ContractOfCarriage => "Contract of carriage",
            FooterLink::TarmacDelayPlan => "Tarmac delay plan",
            FooterLink::SiteMap => "Site map",
            FooterLink::OptionalServicesAndFees => "Optional services and fees",
            FooterLink::CorporateTravel => "Corporate travel",
            FooterLink::TravelAgents => "Travel agents",
            FooterLink::Cargo => "Cargo",
            FooterLink::GiftCertificates => "Gift certificates",
            FooterLink::FollowUs => "Follow us",
        }
    }

    pub fn section(self) -> FooterSection {
        use FooterLink::*;
        match self {
            WhoWeAre | ContactUs | TravelAdvisories | CustomerCommitment | Feedback
            | PrivacyNotice => FooterSection::AboutContoso,
            Careers | Legal | Newsroom | InvestorRelations | ContractOfCarriage
            | TarmacDelayPlan | SiteMap => FooterSection::CustomerService,
            OptionalServicesAndFees | CorporateTravel | TravelAgents | Cargo
            | GiftCertificates | FollowUs => FooterSection::ProductsAndServices,
        }
    }

    pub const ALL: [FooterLink; 19] = [
        FooterLink::WhoWeAre,
        FooterLink::ContactUs,
        FooterLink::TravelAdvisories,
        FooterLink::CustomerCommitment,
        FooterLink::Feedback,
        FooterLink::PrivacyNotice,
        FooterLink::Careers,
        FooterLink::Legal,
        FooterLink::Newsroom,
        FooterLink::InvestorRelations,
        FooterLink::ContractOfCarriage,
        FooterLink::TarmacDelayPlan,
        FooterLink::SiteMap,
        FooterLink::OptionalServicesAndFees,
        FooterLink::CorporateTravel,
        FooterLink::TravelAgents,
        FooterLink::Cargo,
        FooterLink::GiftCertificates,
        FooterLink::FollowUs,
    ];
}

/// The page footer's link columns.
#[async_trait]
pub trait Footer {
    /// Whether the link is present in the footer. Single check, no wait.
    async fn is_present(&self, link: FooterLink) -> Result<bool>;

    /// Clicks the footer link.
    async fn click(&self, link: FooterLink) -> Result<()>;
}
