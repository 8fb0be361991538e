//


extern crate once_cell;
extern crate regex;
extern crate thiserror;

use std::fmt;

use thiserror::Error;

mod generate;
pub mod user_agents;

#[cfg( feature = "ua_log" )]
pub mod ua_log;

/// The set of argument checks which can reject a directive before it is
/// written. A failed check leaves the file exactly as it was, the operation
/// either appends every line it promises or none of them.
#[derive( Debug, Error, PartialEq, Eq )]
pub enum ValidationError {
    /// Sitemap urls must be absolute, ie. begin with "http"
    #[error( "sitemap url {0:?} is invalid, this should be an absolute URL" )]
    SitemapUrl( String ),
    /// Visit times are written as four digits, 0800 for 8am, 0000 for midnight
    #[error( "visit time {0:?} is invalid, format should be four digits, eg.: \"0800\"" )]
    VisitTime( String ),
    /// Crawl delays are a whole number of seconds
    #[error( "delay {0:?} is invalid, format should be one or more digits" )]
    Delay( String ),
    /// Request rates are a fraction with an optional s, m or h unit
    #[error( "rate {0:?} is invalid, this should be a fraction, eg.: \"1/864\"" )]
    Rate( String ),
    /// A single user-agent name may not be the empty string
    #[error( "user-agent can't be blank" )]
    BlankAgent,
}

/// One or many user-agent names attached to a single rule. Names are looked
/// up in [`user_agents`] when the rule is written out; names the table
/// doesn't know are written verbatim.
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum Agents {
    One( String ),
    Many( Vec< String > ),
}

/// A single User-agent section, some agent names paired with the paths they
/// are disallowed. Built and written out by [`RobotsFile::add`], it only
/// lives long enough to be rendered.
#[derive( Debug, Clone )]
pub struct Rule {
    agents: Agents,
    paths: Vec< String >,
}

/// An in-progress robots.txt document. Directives are appended in call
/// order and the finished text is read back with `to_string`, which leaves
/// the file open for further appends.
pub struct RobotsFile {
    rules: String,
}

/// Builds a robots.txt document in one expression, handing a fresh
/// [`RobotsFile`] to the closure and rendering whatever it appended. This is
/// the shape a web layer wants for its robots.txt handler:
///
/// ```rust
/// let body = robots_gen::generate( | rules |{
///     rules.comment( "Keep out of the back office" );
///     rules.add( "all", &[ "/admin/" ] )
/// } ).unwrap( );
///
/// assert_eq!( body, "# Keep out of the back office\nUser-agent: *\nDisallow: /admin/\n" );
/// ```
pub fn generate< F >( build: F ) -> Result< String, ValidationError >
where F: FnOnce( &mut RobotsFile ) -> Result< (), ValidationError > {

    let mut file = RobotsFile::new( );
    build( &mut file )?;
    Ok( file.to_string( ) )
}

impl From< &str > for Agents {
    fn from( agent: &str ) -> Agents {
        Agents::One( agent.to_string( ) )
    }
}

impl From< String > for Agents {
    fn from( agent: String ) -> Agents {
        Agents::One( agent )
    }
}

impl From< Vec< &str > > for Agents {
    fn from( agents: Vec< &str > ) -> Agents {
        Agents::Many( agents.into_iter( ).map( String::from ).collect( ) )
    }
}

impl From< Vec< String > > for Agents {
    fn from( agents: Vec< String > ) -> Agents {
        Agents::Many( agents )
    }
}

impl From< &[ &str ] > for Agents {
    fn from( agents: &[ &str ] ) -> Agents {
        Agents::Many( agents.iter( ).map( | agent |{ agent.to_string( ) } ).collect( ) )
    }
}

impl fmt::Display for RobotsFile {

    fn fmt( &self, f: &mut fmt::Formatter ) -> fmt::Result {
        write!( f, "{}", self.rules )
    }
}
