use chrono::{Days, NaiveDate};
use serde_json::{Map, Value};

use crate::{
    core::{JwClient, JwError, graphql, query::GraphQlQuery},
    providers::Provider,
    releases::{
        model::{NewTitle, Offer, TitleFilter},
        wire,
    },
};

/// The GraphQL document behind [`NewTitlesBuilder`](super::NewTitlesBuilder).
pub const NEW_TITLES_QUERY: &str = r"
query GetNewTitles($country: Country!, $language: Language!, $platform: Platform!, $pageType: NewPageType!,
    $date: Date, $first: Int!, $filter: TitleFilter, $posterProfile: PosterProfile, $posterFormat: ImageFormat) {
    newTitles(
        country: $country
        pageType: $pageType
        date: $date
        first: $first
        filter: $filter
    ) {
        edges {
            newOffer(platform: $platform) {
                standardWebURL
                package {
                    shortName
                    clearName
                }
                monetizationType
            }
            node {
                objectId
                content(country: $country, language: $language) {
                    title
                    fullPath
                    posterUrl(profile: $posterProfile, format: $posterFormat)
                    originalReleaseYear
                    scoring {
                        imdbScore
                    }
                }
                ... on Season {
                    totalEpisodeCount
                    show {
                        content(country: $country, language: $language) {
                            title
                        }
                    }
                }
                __typename
            }
        }
    }
}";

pub(super) async fn fetch_new_titles(
    client: &JwClient,
    country: &str,
    language: &str,
    date: NaiveDate,
    max_days: u32,
    max_count: usize,
    filter: &TitleFilter,
) -> Result<Vec<NewTitle>, JwError> {
    let query = GraphQlQuery::new(NEW_TITLES_QUERY)
        .default_variable("country", country.to_uppercase())
        .default_variable("language", language)
        .default_variable("platform", "WEB")
        .default_variable("pageType", "NEW")
        .default_variable("first", 300)
        .default_variable("filter", serde_json::to_value(filter)?)
        .default_variable("posterProfile", "S276")
        .default_variable("posterFormat", "WEBP");

    let floor = date - Days::new(u64::from(max_days));
    let mut cursor = date;
    let mut titles: Vec<NewTitle> = Vec::new();

    // One round trip per day, newest first. Day results are not cache-eligible
    // (a day's page keeps changing), so this always takes the live path. The
    // count bound is checked at the top, so the last day may push past it;
    // callers truncate if they need an exact cap. A failed day aborts the
    // whole window with no partial result.
    while cursor > floor && titles.len() <= max_count {
        let mut variables = Map::new();
        variables.insert(
            "date".into(),
            Value::from(cursor.format("%Y-%m-%d").to_string()),
        );

        let page: wire::NewTitlesData =
            graphql::execute_query_into(client, &query, variables).await?;

        let edges = page.new_titles.map(|c| c.edges).unwrap_or_default();
        titles.extend(edges.into_iter().map(into_title));

        cursor = cursor - Days::new(1);
    }

    Ok(titles)
}

fn into_title(edge: wire::WireEdge) -> NewTitle {
    let offer = edge.new_offer.map(|o| Offer {
        standard_web_url: o.standard_web_url,
        monetization_type: o.monetization_type,
        package: o.package.map(|p| Provider {
            short_name: p.short_name,
            clear_name: p.clear_name,
        }),
    });

    let mut title = NewTitle {
        offer,
        ..NewTitle::default()
    };

    if let Some(node) = edge.node {
        title.object_id = node.object_id;
        title.object_type = node.typename;
        title.total_episode_count = node.total_episode_count;
        title.show_title = node.show.and_then(|s| s.content).and_then(|c| c.title);

        if let Some(content) = node.content {
            title.title = content.title;
            title.full_path = content.full_path;
            title.poster_url = content.poster_url;
            title.original_release_year = content.original_release_year;
            title.imdb_score = content.scoring.and_then(|s| s.imdb_score);
        }
    }

    title
}
