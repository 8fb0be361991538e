//
// The directive operations themselves. Everything funnels into the one
// `rules` buffer on RobotsFile, one complete line at a time.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::user_agents;
use crate::{ Agents, RobotsFile, Rule, ValidationError };

/***********
 * Validation patterns
 ******/

//NOTE: [0-9] rather than \d throughout, the regex crate reads \d as any
// unicode digit and these fields are plain ascii
static VISIT_TIME: Lazy< Regex > = Lazy::new( ||{
    Regex::new( r"^[0-9]{4}$" ).expect( "visit time pattern" )
} );

static DELAY: Lazy< Regex > = Lazy::new( ||{
    Regex::new( r"^[0-9]+$" ).expect( "delay pattern" )
} );

static RATE: Lazy< Regex > = Lazy::new( ||{
    Regex::new( r"^[0-9]{1,2}/[0-9]+[smh]?$" ).expect( "rate pattern" )
} );

impl RobotsFile {

    /// Creates an empty robots.txt document ready to append directives to.
    /// Most callers want [`crate::generate`] instead, which news one up,
    /// lends it out and renders it in a single call.
    pub fn new( ) -> RobotsFile {
        RobotsFile{ rules: String::new( ) }
    }

    /// Adds a comment. Line breaks in the text are kept, each resulting
    /// line is written with its own leading `#`. Empty text adds nothing,
    /// and a trailing line break does not add a trailing empty comment.
    pub fn comment( &mut self, comment: &str ) {
        for line in comment.lines( ) {
            self.rules.push_str( "# " );
            self.rules.push_str( line );
            self.rules.push( '\n' );
        }
    }

    /// Adds a Sitemap directive per url. Urls must be absolute and are
    /// written exactly as given, nothing is normalized.
    pub fn sitemap( &mut self, urls: &[ &str ] ) -> Result< (), ValidationError > {

        for url in urls {
            if !url.starts_with( "http" ) {
                return Err( ValidationError::SitemapUrl( url.to_string( ) ) );
            }
        }
        for url in urls {
            self.rules.push_str( "Sitemap: " );
            self.rules.push_str( url );
            self.rules.push( '\n' );
        }
        Ok( () )
    }

    /// Adds an Allow directive per path.
    /// Note - To maximise crawler compatibility Allow directives should come
    /// before any Disallow directives.
    pub fn allow( &mut self, routes: &[ &str ] ) {
        for route in routes {
            self.rules.push_str( "Allow: " );
            self.rules.push_str( route );
            self.rules.push( '\n' );
        }
    }

    /// Adds a Disallow directive per path. Useful when mixing Allow and
    /// Disallow lines under one section, otherwise [`RobotsFile::add`]
    /// writes the same lines along with their User-agent.
    pub fn block( &mut self, routes: &[ &str ] ) {
        for route in routes {
            self.rules.push_str( "Disallow: " );
            self.rules.push_str( route );
            self.rules.push( '\n' );
        }
    }

    /// Adds a blank line, purely to help humans read the file.
    pub fn line_break( &mut self ) {
        self.rules.push( '\n' );
    }

    /// See: [`RobotsFile::line_break`]
    pub fn br( &mut self ) {
        self.line_break( );
    }

    /// Adds a Visit-time directive telling compliant robots when to crawl.
    /// Both times are four digit strings, "0800" for 8am, "0000" for
    /// midnight.
    pub fn visit_time( &mut self, start_time: &str, end_time: &str ) -> Result< (), ValidationError > {

        if !VISIT_TIME.is_match( start_time ) {
            return Err( ValidationError::VisitTime( start_time.to_string( ) ) );
        }
        if !VISIT_TIME.is_match( end_time ) {
            return Err( ValidationError::VisitTime( end_time.to_string( ) ) );
        }
        self.rules.push_str( "Visit-time: " );
        self.rules.push_str( start_time );
        self.rules.push( '-' );
        self.rules.push_str( end_time );
        self.rules.push( '\n' );
        Ok( () )
    }

    /// Adds a Crawl-delay directive, a whole number of seconds compliant
    /// robots should leave between requests. Anything whose string form
    /// isn't all digits is rejected.
    pub fn delay< D: ToString >( &mut self, delay: D ) -> Result< (), ValidationError > {

        let delay = delay.to_string( );
        if !DELAY.is_match( &delay ) {
            return Err( ValidationError::Delay( delay ) );
        }
        self.rules.push_str( "Crawl-delay: " );
        self.rules.push_str( &delay );
        self.rules.push( '\n' );
        Ok( () )
    }

    /// Adds a Request-rate directive, a fraction of pages per time span
    /// with an optional s, m or h unit on the denominator. eg. "1/500s"
    pub fn rate( &mut self, rate: &str ) -> Result< (), ValidationError > {

        if !RATE.is_match( rate ) {
            return Err( ValidationError::Rate( rate.to_string( ) ) );
        }
        self.rules.push_str( "Request-rate: " );
        self.rules.push_str( rate );
        self.rules.push( '\n' );
        Ok( () )
    }

    /// Adds a User-agent section: one User-agent line per agent name, then
    /// one Disallow line per path. Agent names can be anything convertible
    /// to [`Agents`], a single name or a list, and each name is swapped for
    /// its canonical identifier when [`user_agents`] knows it.
    pub fn add< A >( &mut self, user_agent: A, paths: &[ &str ] ) -> Result< (), ValidationError >
    where A: Into< Agents > {

        let rule = Rule::new( user_agent.into( ), paths )?;
        self.rules.push_str( &rule.to_string( ) );
        Ok( () )
    }
}

impl Rule {

    /// Pairs some agent names with the paths disallowed to them. A single
    /// name given as an empty string is rejected here, before anything is
    /// written.
    pub fn new( agents: Agents, paths: &[ &str ] ) -> Result< Rule, ValidationError > {

        if let Agents::One( ref name ) = agents {
            if name.is_empty( ) {
                return Err( ValidationError::BlankAgent );
            }
        }
        Ok( Rule{
            agents: agents,
            paths: paths.iter( ).map( | path |{ path.to_string( ) } ).collect( ),
        } )
    }
}

impl fmt::Display for Rule {

    fn fmt( &self, f: &mut fmt::Formatter ) -> fmt::Result {

        match &self.agents {
            Agents::One( name ) => {
                writeln!( f, "User-agent: {}", user_agents::resolve( name ) )?;
            }
            Agents::Many( names ) => {
                for name in names {
                    writeln!( f, "User-agent: {}", user_agents::resolve( name ) )?;
                }
            }
        }
        for path in &self.paths {
            writeln!( f, "Disallow: {}", path )?;
        }
        Ok( () )
    }
}


/***********
 * Unit Tests
 ******/
#[cfg( test )]
mod tests {

    use super::*;

    /***********
     * Atomicity
     ******/
    #[test]
    fn failed_sitemap_leaves_file_untouched( ) {
        let mut file = RobotsFile::new( );

        assert!( file.sitemap( &[ "http://example.com/a.xml", "/b.xml" ] ).is_err( ) );
        assert_eq!( file.to_string( ), "" );
    }

    #[test]
    fn failed_visit_time_leaves_file_untouched( ) {
        let mut file = RobotsFile::new( );

        assert!( file.visit_time( "0800", "12:00" ).is_err( ) );
        assert!( file.visit_time( "8:00", "1200" ).is_err( ) );
        assert_eq!( file.to_string( ), "" );
    }

    #[test]
    fn failed_add_leaves_file_untouched( ) {
        let mut file = RobotsFile::new( );

        assert_eq!( file.add( "", &[ "/" ] ), Err( ValidationError::BlankAgent ) );
        assert_eq!( file.to_string( ), "" );
    }

    /***********
     * Comment edges
     ******/
    #[test]
    fn empty_comment_adds_nothing( ) {
        let mut file = RobotsFile::new( );

        file.comment( "" );
        assert_eq!( file.to_string( ), "" );
    }

    #[test]
    fn trailing_break_adds_no_empty_comment( ) {
        let mut file = RobotsFile::new( );

        file.comment( "one\ntwo\n" );
        assert_eq!( file.to_string( ), "# one\n# two\n" );
    }

    #[test]
    fn interior_break_keeps_its_line( ) {
        let mut file = RobotsFile::new( );

        file.comment( "one\n\ntwo" );
        assert_eq!( file.to_string( ), "# one\n# \n# two\n" );
    }

    /***********
     * Rule rendering
     ******/
    #[test]
    fn empty_agent_list_writes_paths_only( ) {
        let mut file = RobotsFile::new( );

        file.add( Agents::Many( Vec::new( ) ), &[ "/quiet/" ] ).ok( ).unwrap( );
        assert_eq!( file.to_string( ), "Disallow: /quiet/\n" );
    }

    #[test]
    fn blank_names_in_a_list_pass_through( ) {
        //Only a single bare name is checked for blankness, list entries are
        // written as given
        let mut file = RobotsFile::new( );

        file.add( vec![ "google", "" ], &[] ).ok( ).unwrap( );
        assert_eq!( file.to_string( ), "User-agent: Googlebot\nUser-agent: \n" );
    }

    #[test]
    fn delay_rejects_non_digits( ) {
        let mut file = RobotsFile::new( );

        assert!( file.delay( 10 ).is_ok( ) );
        assert!( file.delay( "90" ).is_ok( ) );
        assert!( file.delay( -1 ).is_err( ) );
        assert!( file.delay( 1.5 ).is_err( ) );
        assert!( file.delay( "soon" ).is_err( ) );
        assert_eq!( file.to_string( ), "Crawl-delay: 10\nCrawl-delay: 90\n" );
    }

    #[test]
    fn rate_rejects_wide_numerators( ) {
        let mut file = RobotsFile::new( );

        assert!( file.rate( "10/500s" ).is_ok( ) );
        assert!( file.rate( "100/500s" ).is_err( ) );
        assert!( file.rate( "1/500x" ).is_err( ) );
        assert!( file.rate( "1/" ).is_err( ) );
    }
}
