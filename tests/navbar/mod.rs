mod load_navbar;
