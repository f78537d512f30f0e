//! The registered namespace table.
//!
//! Every slug here is a valid key of a document `@context`. Several Globo
//! namespaces sit underneath `glb` (`http://semantica.globo.com/`), so
//! compaction must always pick the longest matching namespace.

use crate::model::iris::{OWL, RDF, RDFS, XSD};
use crate::model::Namespace;

/// `glb` namespace: root of the Semantica namespaces.
pub const NS_GLB: &str = "http://semantica.globo.com/";
/// `upper` namespace: upper ontology.
pub const NS_UPPER: &str = "http://semantica.globo.com/upper/";
/// `base` namespace: base ontology.
pub const NS_BASE: &str = "http://semantica.globo.com/base/";
/// `place` namespace: places.
pub const NS_PLACE: &str = "http://semantica.globo.com/place/";
/// `person` namespace: people.
pub const NS_PERSON: &str = "http://semantica.globo.com/person/";
/// `schema` namespace: schema.org.
pub const NS_SCHEMA: &str = "http://schema.org/";

/// Returns the full namespace table, in slug order.
#[must_use]
pub fn all() -> Vec<Namespace> {
    vec![
        Namespace {
            slug: "base",
            iri: NS_BASE,
            label: "Semantica base ontology",
        },
        Namespace {
            slug: "dbpedia",
            iri: "http://dbpedia.org/ontology/",
            label: "DBpedia ontology",
        },
        Namespace {
            slug: "dc",
            iri: "http://purl.org/dc/elements/1.1/",
            label: "Dublin Core elements",
        },
        Namespace {
            slug: "dct",
            iri: "http://purl.org/dc/terms/",
            label: "Dublin Core terms",
        },
        Namespace {
            slug: "ego",
            iri: "http://semantica.globo.com/ego/",
            label: "Ego",
        },
        Namespace {
            slug: "esportes",
            iri: "http://semantica.globo.com/esportes/",
            label: "Esportes",
        },
        Namespace {
            slug: "eureka",
            iri: "http://semantica.globo.com/eureka/",
            label: "Eureka",
        },
        Namespace {
            slug: "event",
            iri: "http://purl.org/NET/c4dm/event.owl#",
            label: "Event ontology",
        },
        Namespace {
            slug: "foaf",
            iri: "http://xmlns.com/foaf/0.1/",
            label: "Friend of a Friend",
        },
        Namespace {
            slug: "g1",
            iri: "http://semantica.globo.com/G1/",
            label: "G1",
        },
        Namespace {
            slug: "geo",
            iri: "http://www.w3.org/2003/01/geo/wgs84_pos#",
            label: "WGS84 geo positioning",
        },
        Namespace {
            slug: "glb",
            iri: NS_GLB,
            label: "Semantica",
        },
        Namespace {
            slug: "organization",
            iri: "http://semantica.globo.com/organization/",
            label: "Organizations",
        },
        Namespace {
            slug: "owl",
            iri: OWL,
            label: "OWL",
        },
        Namespace {
            slug: "person",
            iri: NS_PERSON,
            label: "People",
        },
        Namespace {
            slug: "place",
            iri: NS_PLACE,
            label: "Places",
        },
        Namespace {
            slug: "rdf",
            iri: RDF,
            label: "RDF",
        },
        Namespace {
            slug: "rdfs",
            iri: RDFS,
            label: "RDF Schema",
        },
        Namespace {
            slug: "schema",
            iri: NS_SCHEMA,
            label: "Schema.org",
        },
        Namespace {
            slug: "time",
            iri: "http://www.w3.org/2006/time#",
            label: "OWL-Time",
        },
        Namespace {
            slug: "tvg",
            iri: "http://semantica.globo.com/tvg/",
            label: "TV Globo",
        },
        Namespace {
            slug: "upper",
            iri: NS_UPPER,
            label: "Semantica upper ontology",
        },
        Namespace {
            slug: "xsd",
            iri: XSD,
            label: "XML Schema datatypes",
        },
    ]
}
