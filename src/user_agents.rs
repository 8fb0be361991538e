//
// The table of crawlers worth knowing by a short name. Process-wide and
// read-only, nothing here mutates after first touch.
//
// Identifier sources:
// http://www.google.com/support/webmasters/bin/answer.py?hl=en&answer=40364
// http://help.live.com/help.aspx?mkt=en-gb&project=wl_webmasters
// http://help.yahoo.com/l/us/yahoo/search/webcrawler/
// http://about.ask.com/en/docs/about/webmasters.shtml
// http://www.gigablast.com/spider.html
// http://www.scrubtheweb.com/help/technology.html
// http://www.dmoz.org/guidelines/robozilla.html
// http://nutch.sourceforge.net/docs/en/bot.html
// http://www.alexa.com/help/webmasters
// http://www.baidu.com/search/spider.htm
// http://www.picsearch.com/menu.cgi?item=Psbot

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Every crawler the table knows by a short name, mapped to the identifier
/// it presents in its User-agent header.
pub static KNOWN_USER_AGENTS: Lazy< HashMap< &'static str, &'static str > > = Lazy::new( ||{

    let mut agents = HashMap::new( );
    agents.insert( "google", "Googlebot" );
    agents.insert( "google_image", "Googlebot-Image" );
    agents.insert( "google_mobile", "Googlebot-Mobile" );
    agents.insert( "msn", "MSNBot" );
    agents.insert( "yahoo", "Slurp" );
    agents.insert( "yahoo_mm_crawler", "yahoo-mmcrawler" );
    agents.insert( "yahoo_blogs", "yahoo-blogs/v3.9" );
    agents.insert( "ask", "Teoma" );
    agents.insert( "cuil", "Twiceler" );
    agents.insert( "gigablast", "Gigabot" );
    agents.insert( "scrub_the_web", "Scrubby" );
    agents.insert( "dmoz", "Robozilla" );
    agents.insert( "nutch", "Nutch" );
    agents.insert( "alexa", "ia_archiver" );
    agents.insert( "baidu", "baiduspider" );
    agents.insert( "naver", "naverbot" );
    agents.insert( "yeti", "yeti" );
    agents.insert( "picsearch", "psbot" );
    agents.insert( "singing_fish", "asterias" );
    agents.insert( "technorati", "Technoratibot" );
    agents
} );

/// The known table plus the wildcard entry, "all" naming every crawler at
/// once. This is the map rule lookups go through.
pub static USER_AGENTS: Lazy< HashMap< &'static str, &'static str > > = Lazy::new( ||{

    let mut agents = KNOWN_USER_AGENTS.clone( );
    agents.insert( "all", "*" );
    agents
} );

//NOTE: the wildcard is left out here, it names no crawler a request header
// could ever carry
static ROBOT_PATTERN: Lazy< Regex > = Lazy::new( ||{

    let names = canonical_names( )
        .iter( )
        .map( | name |{ regex::escape( name ) } )
        .collect::< Vec< String > >( )
        .join( "|" );

    Regex::new( &format!( "(?i)({})", names ) ).expect( "agent names form a valid pattern" )
} );

/// Looks a short name up in the table, wildcard included.
pub fn lookup( name: &str ) -> Option< &'static str > {
    USER_AGENTS.get( name ).copied( )
}

/// The canonical identifier for a name, or the name itself when the table
/// doesn't know it. Arbitrary literal crawler names pass through untouched.
pub fn resolve( name: &str ) -> &str {
    lookup( name ).unwrap_or( name )
}

/// Every canonical identifier in the known table, sorted so callers see a
/// stable order. The wildcard is not a canonical identifier and is left out.
pub fn canonical_names( ) -> Vec< &'static str > {

    let mut names = KNOWN_USER_AGENTS.values( ).copied( ).collect::< Vec< &'static str > >( );
    names.sort_unstable( );
    names
}

/// Whether a request's User-agent header belongs to a crawler in the known
/// table. Matching is case-insensitive and anywhere in the header, the way
/// real headers bury the identifier in amongst version and contact noise.
/// Hosts use this to skip sessions or logging for robot traffic.
pub fn is_robot( user_agent: &str ) -> bool {
    ROBOT_PATTERN.is_match( user_agent )
}


/***********
 * Unit Tests
 ******/
#[cfg( test )]
mod tests {

    use super::*;

    #[test]
    fn lookup_known_names( ) {
        assert_eq!( lookup( "google" ), Some( "Googlebot" ) );
        assert_eq!( lookup( "yahoo" ), Some( "Slurp" ) );
        assert_eq!( lookup( "all" ), Some( "*" ) );
        assert_eq!( lookup( "SpecialBot" ), None );
    }

    #[test]
    fn resolve_falls_through( ) {
        assert_eq!( resolve( "msn" ), "MSNBot" );
        assert_eq!( resolve( "SpecialBot" ), "SpecialBot" );
    }

    #[test]
    fn canonical_names_skip_the_wildcard( ) {
        let names = canonical_names( );

        assert_eq!( names.len( ), 20 );
        assert!( !names.contains( &"*" ) );
        assert!( names.contains( &"Googlebot" ) );
    }

    #[test]
    fn robots_match_inside_full_headers( ) {
        assert!( is_robot( "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)" ) );
        assert!( is_robot( "mozilla/5.0 (compatible; googlebot/2.1)" ) );
        assert!( is_robot( "msnbot/1.1 (+http://search.msn.com/msnbot.htm)" ) );
    }

    #[test]
    fn browsers_are_not_robots( ) {
        assert!( !is_robot( "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0" ) );
    }

    #[test]
    fn escaped_names_match_literally( ) {
        //yahoo-blogs/v3.9 carries a dot, which must not match any character
        assert!( is_robot( "yahoo-blogs/v3.9" ) );
        assert!( !is_robot( "yahoo-blogs/v329" ) );
    }
}
