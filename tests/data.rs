// A set of expected robots.txt documents as rust &'static str constants

//The simplest useful document, one catch-all rule
pub static EXPECTED_CATCH_ALL: &'static str =
    "User-agent: *\n\
     Disallow: /\n";

//A document built from two single-agent rules in a row, one resolved from
// the table and one catch-all
pub static EXPECTED_TWO_RULES: &'static str =
    "User-agent: *\n\
     Disallow: /\n\
     User-agent: Googlebot\n\
     Disallow: /index.html\n";

//A document built from one rule naming a list of agents
pub static EXPECTED_AGENT_LIST: &'static str =
    "User-agent: Googlebot\n\
     User-agent: Slurp\n\
     Disallow: /index.html\n\
     Disallow: /rude_pics/*.jpg\n";

//A document exercising every directive the builder knows, in one sitting
pub static EXPECTED_FULL: &'static str =
    "# Block all bots from all pages except articles\n\
     User-agent: *\n\
     Allow: /articles/show\n\
     Allow: /articles/\n\
     Disallow: /\n\
     Request-rate: 1/5s\n\
     # Request these robots only crawl between 2am and 8am.\n\
     # (Those are our quiet times)\n\
     Visit-time: 0200-0800\n\
     \n\
     # Give google, yahoo and msn a little extra access\n\
     User-agent: Googlebot\n\
     User-agent: Slurp\n\
     User-agent: MSNBot\n\
     Disallow: /private/\n\
     Disallow: /admin\n\
     Crawl-delay: 10\n\
     \n\
     Sitemap: http://mydomain.com/articles.xml\n\
     Sitemap: http://mydomain.com/sitemap.xml\n";
