
extern crate robots_gen;

use robots_gen::{ generate, RobotsFile, ValidationError };
use robots_gen::user_agents;

mod data;
use data::{ EXPECTED_CATCH_ALL, EXPECTED_TWO_RULES, EXPECTED_AGENT_LIST, EXPECTED_FULL };

#[test]
fn test_add_agent_and_paths( ) {

    let result = generate( | rules |{
        rules.add( "google", &[ "/", "/users/" ] )
    } );

    assert_eq!( result.ok( ).unwrap( ),
                "User-agent: Googlebot\nDisallow: /\nDisallow: /users/\n" );
}

#[test]
fn test_catch_all_agent( ) {

    let result = generate( | rules |{
        rules.add( "all", &[ "/" ] )
    } );

    assert_eq!( result.ok( ).unwrap( ), EXPECTED_CATCH_ALL );
}

#[test]
fn test_rules_keep_call_order( ) {

    let result = generate( | rules |{
        rules.add( "all", &[ "/" ] )?;
        rules.add( "google", &[ "/index.html" ] )
    } );

    assert_eq!( result.ok( ).unwrap( ), EXPECTED_TWO_RULES );
}

#[test]
fn test_agent_lists( ) {

    let result = generate( | rules |{
        rules.add( vec![ "google", "yahoo" ], &[ "/index.html", "/rude_pics/*.jpg" ] )
    } );

    assert_eq!( result.ok( ).unwrap( ), EXPECTED_AGENT_LIST );
}

#[test]
fn test_agent_slices( ) {

    let result = generate( | rules |{
        rules.add( &[ "msn", "cuil" ][ .. ], &[ "/private/" ] )
    } );

    assert_eq!( result.ok( ).unwrap( ),
                "User-agent: MSNBot\nUser-agent: Twiceler\nDisallow: /private/\n" );
}

#[test]
fn test_unknown_agents_pass_through( ) {

    let result = generate( | rules |{
        rules.add( "SpecialBot", &[ "/cellar/" ] )
    } );

    assert_eq!( result.ok( ).unwrap( ), "User-agent: SpecialBot\nDisallow: /cellar/\n" );
}

#[test]
fn test_blank_agents_are_rejected( ) {

    let result = generate( | rules |{
        rules.add( "", &[ "/", "index.html" ] )
    } );

    assert_eq!( result, Err( ValidationError::BlankAgent ) );
}

#[test]
fn test_comments_span_lines( ) {

    let result = generate( | rules |{
        rules.comment( "This is a comment\nOver two lines\n" );
        Ok( () )
    } );

    assert_eq!( result.ok( ).unwrap( ), "# This is a comment\n# Over two lines\n" );
}

#[test]
fn test_sitemaps( ) {

    let result = generate( | rules |{
        rules.sitemap( &[ "http://mydomain.com/sitemap.xml", "http://mydomain.com/new_posts.xml" ] )
    } );

    assert_eq!( result.ok( ).unwrap( ),
                "Sitemap: http://mydomain.com/sitemap.xml\nSitemap: http://mydomain.com/new_posts.xml\n" );
}

#[test]
fn test_relative_sitemaps_are_rejected( ) {

    let result = generate( | rules |{
        rules.sitemap( &[ "/sitemap.xml" ] )
    } );

    assert_eq!( result, Err( ValidationError::SitemapUrl( "/sitemap.xml".to_string( ) ) ) );
}

#[test]
fn test_allow( ) {

    let result = generate( | rules |{
        rules.allow( &[ "/index.html", "/users/index.html" ] );
        Ok( () )
    } );

    assert_eq!( result.ok( ).unwrap( ), "Allow: /index.html\nAllow: /users/index.html\n" );
}

#[test]
fn test_block( ) {

    let result = generate( | rules |{
        rules.block( &[ "/users/new", "/blog/" ] );
        Ok( () )
    } );

    assert_eq!( result.ok( ).unwrap( ), "Disallow: /users/new\nDisallow: /blog/\n" );
}

#[test]
fn test_visit_time( ) {

    let result = generate( | rules |{
        rules.visit_time( "0800", "1200" )
    } );

    assert_eq!( result.ok( ).unwrap( ), "Visit-time: 0800-1200\n" );
}

#[test]
fn test_clock_times_are_rejected( ) {

    let result = generate( | rules |{
        rules.visit_time( "08:00", "12:00" )
    } );

    assert_eq!( result, Err( ValidationError::VisitTime( "08:00".to_string( ) ) ) );
}

#[test]
fn test_line_breaks( ) {

    let result = generate( | rules |{
        rules.line_break( );
        Ok( () )
    } );

    assert_eq!( result.ok( ).unwrap( ), "\n" );
}

#[test]
fn test_br_is_a_line_break( ) {

    let result = generate( | rules |{
        rules.br( );
        Ok( () )
    } );

    assert_eq!( result.ok( ).unwrap( ), "\n" );
}

#[test]
fn test_rate( ) {

    let result = generate( | rules |{
        rules.rate( "1/500" )
    } );

    assert_eq!( result.ok( ).unwrap( ), "Request-rate: 1/500\n" );
}

#[test]
fn test_rate_units( ) {

    let result = generate( | rules |{
        rules.rate( "1/500s" )?;
        rules.rate( "1/500m" )?;
        rules.rate( "1/500h" )
    } );

    assert_eq!( result.ok( ).unwrap( ),
                "Request-rate: 1/500s\nRequest-rate: 1/500m\nRequest-rate: 1/500h\n" );
}

#[test]
fn test_unknown_rate_units_are_rejected( ) {

    let result = generate( | rules |{
        rules.rate( "1/666x" )
    } );

    assert_eq!( result, Err( ValidationError::Rate( "1/666x".to_string( ) ) ) );
}

#[test]
fn test_delay( ) {

    let result = generate( | rules |{
        rules.delay( 10 )
    } );

    assert_eq!( result.ok( ).unwrap( ), "Crawl-delay: 10\n" );
}

#[test]
fn test_rendering_is_idempotent_and_leaves_the_file_open( ) {

    let mut file = RobotsFile::new( );

    file.add( "all", &[ "/" ] ).ok( ).unwrap( );
    assert_eq!( file.to_string( ), file.to_string( ) );
    assert_eq!( file.to_string( ), EXPECTED_CATCH_ALL );

    //a render is not a close, the file keeps accepting directives
    file.delay( 10 ).ok( ).unwrap( );
    assert_eq!( file.to_string( ), "User-agent: *\nDisallow: /\nCrawl-delay: 10\n" );
}

#[test]
fn test_combining_all_of_these_into_something_beautiful( ) {

    let result = generate( | rules |{
        rules.comment( "Block all bots from all pages except articles" );
        rules.add( "all", &[] )?;
        rules.allow( &[ "/articles/show", "/articles/" ] );
        rules.block( &[ "/" ] );
        rules.rate( "1/5s" )?;
        rules.comment( "Request these robots only crawl between 2am and 8am.\n(Those are our quiet times)\n" );
        rules.visit_time( "0200", "0800" )?;
        rules.line_break( );
        rules.comment( "Give google, yahoo and msn a little extra access" );
        rules.add( vec![ "google", "yahoo", "msn" ], &[ "/private/", "/admin" ] )?;
        rules.delay( 10 )?;
        rules.br( );
        rules.sitemap( &[ "http://mydomain.com/articles.xml", "http://mydomain.com/sitemap.xml" ] )
    } );

    assert_eq!( result.ok( ).unwrap( ), EXPECTED_FULL );
}

#[test]
fn test_the_registry_backs_the_builder( ) {

    //the canonical names the builder writes are the same values the table
    // enumerates for session matching
    let names = user_agents::canonical_names( );

    assert!( names.contains( &"Googlebot" ) );
    assert!( names.contains( &"Slurp" ) );
    assert!( user_agents::is_robot( "Mozilla/5.0 (compatible; Googlebot/2.1)" ) );
    assert!( !user_agents::is_robot( "Mozilla/5.0 (Windows NT 10.0) Chrome/120.0" ) );
}
